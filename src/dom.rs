use crate::constants::*;
use crate::input::{self, RawAttributes};
use holocard_core::Rect;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every `.holo-card` element in document order.
pub fn find_cards(document: &web::Document) -> Vec<web::HtmlElement> {
    let list = match document.query_selector_all(CARD_SELECTOR) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[dom] card query failed: {:?}", e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    input::dom_rect(r.left(), r.top(), r.width(), r.height())
}

pub fn read_attributes(el: &web::Element) -> RawAttributes {
    RawAttributes {
        animation_speed_ms: el.get_attribute(ATTR_ANIMATION_SPEED),
        enable_flip: el.get_attribute(ATTR_ENABLE_FLIP),
        style: el.get_attribute(ATTR_HOLO_STYLE),
        prevent_double_click: el.get_attribute(ATTR_PREVENT_DOUBLE_CLICK),
    }
}

/// Cards must be focusable for keyboard activation.
pub fn ensure_focusable(el: &web::Element) {
    if !el.has_attribute("tabindex") {
        _ = el.set_attribute("tabindex", "0");
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Swap the `quality-*` class for `class`.
pub fn replace_quality_class(el: &web::Element, class: &str) {
    let list = el.class_list();
    let stale: Vec<String> = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter(|c| c.starts_with(QUALITY_CLASS_PREFIX) && c != class)
        .collect();
    for c in stale {
        _ = list.remove_1(&c);
    }
    _ = list.add_1(class);
}
