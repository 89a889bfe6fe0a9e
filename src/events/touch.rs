use super::CardWiring;
use crate::input;
use glam::Vec2;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Position of contact `id` in `list`, if it is there.
fn contact_point(list: &web::TouchList, id: i32) -> Option<Vec2> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .find(|t| t.identifier() == id)
        .map(|t| input::client_point(t.client_x(), t.client_y()))
}

/// The tracked contact among `list`, released from the tracker.
fn released_contact(w: &CardWiring, list: &web::TouchList) -> Option<Vec2> {
    let id = w.contact.borrow().tracked()?;
    let point = contact_point(list, id)?;
    w.contact.borrow_mut().release(id).then_some(point)
}

pub fn wire_touch_handlers(w: &CardWiring) {
    wire_touchstart(w);
    wire_touchmove(w);
    wire_touchend(w);
    wire_touchcancel(w);
}

fn wire_touchstart(w: &CardWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(t) = ev.changed_touches().get(0) else {
            return;
        };
        let active = ev.touches().length();
        if !wiring.contact.borrow_mut().begin(t.identifier(), active) {
            log::debug!("[touch] ignoring extra contact ({} down)", active);
            return;
        }
        let p = input::client_point(t.client_x(), t.client_y());
        wiring.controller_at_layout().touch_start(p, Instant::now());
    }) as Box<dyn FnMut(web::TouchEvent)>);
    _ = w
        .element
        .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchmove(w: &CardWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(id) = wiring.contact.borrow().tracked() else {
            return;
        };
        if let Some(p) = contact_point(&ev.touches(), id) {
            wiring.controller_at_layout().touch_move(p, Instant::now());
        }
    }) as Box<dyn FnMut(web::TouchEvent)>);
    _ = w
        .element
        .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchend(w: &CardWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(p) = released_contact(&wiring, &ev.changed_touches()) else {
            return;
        };
        if let Some(g) = wiring.controller_at_layout().touch_end(p, Instant::now()) {
            log::debug!("[touch] {:?} after {:?}", g.kind, g.duration);
        }
    }) as Box<dyn FnMut(web::TouchEvent)>);
    _ = w
        .element
        .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchcancel(w: &CardWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if released_contact(&wiring, &ev.changed_touches()).is_some() {
            wiring.controller_at_layout().touch_cancel(Instant::now());
        }
    }) as Box<dyn FnMut(web::TouchEvent)>);
    _ = w
        .element
        .add_event_listener_with_callback("touchcancel", closure.as_ref().unchecked_ref());
    closure.forget();
}
