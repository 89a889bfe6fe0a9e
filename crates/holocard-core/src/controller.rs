//! Routes raw input to the card: touch goes through the arbiter first, and
//! mouse events are dropped while the arbiter's suppression window is open.

use glam::Vec2;
use instant::Instant;

use crate::card::{CardEvent, CardInteraction};
use crate::config::CardConfig;
use crate::effect::EffectDescriptor;
use crate::pointer::{Rect, TransformConfig};
use crate::touch::{Gesture, GestureKind, TouchArbiter, TouchConfig, TouchSignal};

/// Outcome of a routed input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Routed {
    Handled,
    /// Mouse event swallowed because it trails a touch.
    Suppressed,
    /// The card refused the request, e.g. a flip while one is running.
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerEvent {
    Card(CardEvent),
    HoldStarted,
    SuppressionEnded,
}

#[derive(Debug)]
pub struct CardController {
    card: CardInteraction,
    touch: TouchArbiter,
    bounds: Rect,
    // last client-space position seen by the card, for per-frame sampling
    last_client: Vec2,
    card_events: Vec<CardEvent>,
    touch_signals: Vec<TouchSignal>,
}

impl CardController {
    pub fn new(config: CardConfig, transform: TransformConfig, touch: TouchConfig) -> Self {
        Self {
            card: CardInteraction::new(config, transform),
            touch: TouchArbiter::new(touch),
            bounds: Rect::default(),
            last_client: Vec2::ZERO,
            card_events: Vec::new(),
            touch_signals: Vec::new(),
        }
    }

    pub fn card(&self) -> &CardInteraction {
        &self.card
    }

    pub fn card_mut(&mut self) -> &mut CardInteraction {
        &mut self.card
    }

    pub fn touch(&self) -> &TouchArbiter {
        &self.touch
    }

    /// Current element bounds in client pixels. Refreshed by the view layer
    /// on layout changes and before every event it routes.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    fn mouse_blocked(&self, now: Instant) -> bool {
        self.card.config().prevent_double_click && self.touch.should_suppress_mouse_event(now)
    }

    pub fn pointer_enter(&mut self, now: Instant) -> Routed {
        if self.mouse_blocked(now) {
            return Routed::Suppressed;
        }
        self.card.handle_pointer_enter();
        Routed::Handled
    }

    pub fn pointer_move(&mut self, client: Vec2, now: Instant) -> Routed {
        if self.mouse_blocked(now) {
            return Routed::Suppressed;
        }
        self.last_client = client;
        let local = self.bounds.local_point(client);
        self.card.handle_pointer_move(local);
        Routed::Handled
    }

    pub fn pointer_leave(&mut self, now: Instant) -> Routed {
        if self.mouse_blocked(now) {
            return Routed::Suppressed;
        }
        self.card.handle_pointer_leave(now);
        Routed::Handled
    }

    pub fn click(&mut self, now: Instant) -> Routed {
        if self.mouse_blocked(now) {
            log::debug!("[input] click dropped inside the touch window");
            return Routed::Suppressed;
        }
        self.flip(now)
    }

    /// Keyboard activation (Enter/Space on a focused card).
    pub fn activate(&mut self, now: Instant) -> Routed {
        self.flip(now)
    }

    fn flip(&mut self, now: Instant) -> Routed {
        if self.card.start_flip(now) {
            Routed::Handled
        } else {
            Routed::Rejected
        }
    }

    /// Keyboard focus shows the effect as if the pointer rested at the center.
    pub fn focus(&mut self) -> Routed {
        self.card.handle_pointer_enter();
        self.last_client = self.bounds.center();
        let center = self.bounds.local_point(self.last_client);
        self.card.handle_pointer_move(center);
        Routed::Handled
    }

    pub fn blur(&mut self, now: Instant) -> Routed {
        self.card.handle_pointer_leave(now);
        Routed::Handled
    }

    pub fn touch_start(&mut self, client: Vec2, now: Instant) -> Routed {
        self.touch.touch_start(client, now);
        self.last_client = client;
        let local = self.bounds.local_point(client);
        self.card.handle_touch_start(local);
        Routed::Handled
    }

    pub fn touch_move(&mut self, client: Vec2, now: Instant) -> Routed {
        if !self.touch.is_active() {
            return Routed::Rejected;
        }
        self.touch.touch_move(client, now);
        self.last_client = client;
        let local = self.bounds.local_point(client);
        self.card.handle_touch_move(local);
        Routed::Handled
    }

    /// Ends the touch. A tap flips the card; the trailing synthetic click is
    /// then swallowed by the suppression window.
    pub fn touch_end(&mut self, client: Vec2, now: Instant) -> Option<Gesture> {
        let gesture = self.touch.touch_end(client, now)?;
        self.card.handle_touch_end(now);
        if gesture.kind == GestureKind::Tap {
            self.flip(now);
        }
        Some(gesture)
    }

    pub fn touch_cancel(&mut self, now: Instant) -> Option<Gesture> {
        let gesture = self.touch.touch_cancel(now)?;
        self.card.handle_touch_end(now);
        Some(gesture)
    }

    pub fn tick(&mut self, now: Instant, out: &mut Vec<ControllerEvent>) {
        self.touch_signals.clear();
        self.touch.tick(now, &mut self.touch_signals);
        for signal in self.touch_signals.drain(..) {
            match signal {
                TouchSignal::HoldStarted { .. } => {
                    self.card.handle_touch_hold();
                    out.push(ControllerEvent::HoldStarted);
                }
                TouchSignal::SuppressionEnded => out.push(ControllerEvent::SuppressionEnded),
            }
        }

        self.card_events.clear();
        self.card.tick(now, &mut self.card_events);
        out.extend(self.card_events.drain(..).map(ControllerEvent::Card));
    }

    /// The effect to paint at the last routed pointer position, or `None`
    /// when nothing should be drawn. Writes intensity back into card state.
    pub fn sample_effect(&mut self) -> Option<EffectDescriptor> {
        let flipped = self.card.state().is_flipped;
        let bounds = self.bounds;
        self.card
            .compute_effect_for_face(flipped, self.last_client, &bounds)
    }

    pub fn reset(&mut self) {
        self.card.reset();
        self.touch.reset();
    }

    pub fn destroy(&mut self) {
        self.touch.reset();
        self.card.destroy();
    }
}
