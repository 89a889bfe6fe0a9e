use super::CardWiring;
use crate::input;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_keyboard_handlers(w: &CardWiring) {
    wire_keydown(w);
    wire_focus(w);
    wire_blur(w);
}

fn wire_keydown(w: &CardWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() || !input::is_activation_key(&ev.key()) {
            return;
        }
        // Space would otherwise scroll the page
        ev.prevent_default();
        wiring.controller_at_layout().activate(Instant::now());
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = w
        .element
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_focus(w: &CardWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        wiring.controller_at_layout().focus();
    }) as Box<dyn FnMut()>);
    _ = w
        .element
        .add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_blur(w: &CardWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        wiring.controller_at_layout().blur(Instant::now());
    }) as Box<dyn FnMut()>);
    _ = w
        .element
        .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
    closure.forget();
}
