use glam::Vec2;
use holocard_core::Rect;

/// Keys that activate a focused card, matching native button behavior.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[inline]
pub fn client_point(client_x: i32, client_y: i32) -> Vec2 {
    Vec2::new(client_x as f32, client_y as f32)
}

/// Bounding client rect as the core's `Rect`. Layout can report NaN for
/// detached elements; those collapse to an empty rect, which the core
/// answers with the centered pointer record.
#[inline]
pub fn dom_rect(left: f64, top: f64, width: f64, height: f64) -> Rect {
    let finite = |v: f64| if v.is_finite() { v as f32 } else { 0.0 };
    Rect::new(finite(left), finite(top), finite(width), finite(height))
}

/// Raw attribute values read off a card element, owned so they can outlive
/// the DOM call that produced them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawAttributes {
    pub animation_speed_ms: Option<String>,
    pub enable_flip: Option<String>,
    pub style: Option<String>,
    pub prevent_double_click: Option<String>,
}

impl RawAttributes {
    pub fn as_card_attributes(&self) -> holocard_core::CardAttributes<'_> {
        holocard_core::CardAttributes {
            animation_speed_ms: self.animation_speed_ms.as_deref(),
            enable_flip: self.enable_flip.as_deref(),
            style: self.style.as_deref(),
            prevent_double_click: self.prevent_double_click.as_deref(),
        }
    }
}

/// Which touch contact drives the card. A card follows one finger: a
/// session opens only when exactly one contact is down, and later fingers
/// neither restart nor end it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactTracker {
    tracked: Option<i32>,
}

impl ContactTracker {
    /// `touchstart` for contact `id` with `active_contacts` fingers down.
    /// Returns whether the start should be routed to the card.
    pub fn begin(&mut self, id: i32, active_contacts: u32) -> bool {
        if active_contacts != 1 {
            return false;
        }
        // a lone contact also replaces an id whose end event never arrived
        self.tracked = Some(id);
        true
    }

    #[inline]
    pub fn is_tracked(&self, id: i32) -> bool {
        self.tracked == Some(id)
    }

    /// `touchend`/`touchcancel` for `id`. Returns whether it ended the
    /// tracked contact.
    pub fn release(&mut self, id: i32) -> bool {
        if self.is_tracked(id) {
            self.tracked = None;
            true
        } else {
            false
        }
    }

    pub fn tracked(&self) -> Option<i32> {
        self.tracked
    }
}
