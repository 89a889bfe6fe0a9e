use super::CardWiring;
use crate::input;
use holocard_core::Routed;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_mouse_handlers(w: &CardWiring) {
    wire_mouseenter(w);
    wire_mousemove(w);
    wire_mouseleave(w);
    wire_click(w);
}

fn wire_mouseenter(w: &CardWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        wiring.controller_at_layout().pointer_enter(Instant::now());
    }) as Box<dyn FnMut(web::MouseEvent)>);
    _ = w
        .element
        .add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousemove(w: &CardWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let client = input::client_point(ev.client_x(), ev.client_y());
        wiring
            .controller_at_layout()
            .pointer_move(client, Instant::now());
    }) as Box<dyn FnMut(web::MouseEvent)>);
    _ = w
        .element
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseleave(w: &CardWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        wiring.controller_at_layout().pointer_leave(Instant::now());
    }) as Box<dyn FnMut(web::MouseEvent)>);
    _ = w
        .element
        .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &CardWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let routed = wiring.controller_at_layout().click(Instant::now());
        // the tap already flipped the card; keep the synthetic click from
        // reaching page handlers too
        if routed == Routed::Suppressed {
            ev.prevent_default();
            ev.stop_propagation();
        }
    }) as Box<dyn FnMut(web::MouseEvent)>);
    _ = w
        .element
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
