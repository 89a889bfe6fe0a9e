//! DOM listeners for a single card. Every handler stamps `Instant::now()`,
//! refreshes the card bounds and routes through its `CardController`.

use crate::input::ContactTracker;
use holocard_core::CardController;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod keyboard;
mod pointer;
mod touch;

#[derive(Clone)]
pub struct CardWiring {
    pub element: web::HtmlElement,
    pub controller: Rc<RefCell<CardController>>,
    pub contact: Rc<RefCell<ContactTracker>>,
}

impl CardWiring {
    /// Borrow the controller with bounds taken from current layout.
    fn controller_at_layout(&self) -> std::cell::RefMut<'_, CardController> {
        let mut ctrl = self.controller.borrow_mut();
        ctrl.set_bounds(crate::dom::element_rect(&self.element));
        ctrl
    }
}

pub fn wire_card(w: &CardWiring) {
    pointer::wire_mouse_handlers(w);
    touch::wire_touch_handlers(w);
    keyboard::wire_keyboard_handlers(w);
}
