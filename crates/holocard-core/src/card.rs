//! Card interaction state machine.
//!
//! `CardInteraction` is the single owner of [`CardState`]. Event handlers
//! update state synchronously; anything that has to happen later (flip
//! completion, the hover decay ramp) is a [`TimerQueue`] entry drained by
//! [`CardInteraction::tick`], which the host calls once per animation frame.

use glam::Vec2;
use instant::Instant;

use crate::config::CardConfig;
use crate::constants::{DECAY_DURATION, DECAY_STEPS, MAX_HOLOGRAPHIC_INTENSITY, TOUCH_HOLD_BOOST};
use crate::effect::{back_effect, front_effect, EffectDescriptor};
use crate::pointer::{Rect, TransformConfig};
use crate::timer::TimerQueue;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardState {
    pub is_flipped: bool,
    pub is_hovering: bool,
    /// A flip is in flight. Effects are suspended and hover updates are
    /// ignored until it completes.
    pub is_animating: bool,
    pub holographic_intensity: f32,
    /// Element-local pixels; the origin whenever hover ends.
    pub pointer_position: Vec2,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            is_flipped: false,
            is_hovering: false,
            is_animating: false,
            holographic_intensity: 0.0,
            pointer_position: Vec2::ZERO,
        }
    }
}

/// Notifications produced by [`CardInteraction::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardEvent {
    FlipCompleted { is_flipped: bool },
    DecayFinished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CardTimer {
    FlipComplete,
    DecayStep(u32),
}

#[derive(Clone, Copy, Debug)]
struct HoverSnapshot {
    is_hovering: bool,
    pointer_position: Vec2,
}

#[derive(Debug)]
pub struct CardInteraction {
    config: CardConfig,
    transform: TransformConfig,
    state: CardState,
    timers: TimerQueue<CardTimer>,
    snapshot: Option<HoverSnapshot>,
    // pointer left mid-flip; applied instead of the snapshot on completion
    pending_leave: bool,
    decay_from: f32,
    decay_level: f32,
    // sustained-press multiplier; survives per-frame recomputation until release
    hold_boost: f32,
    destroyed: bool,
}

impl CardInteraction {
    pub fn new(config: CardConfig, transform: TransformConfig) -> Self {
        Self {
            config,
            transform,
            state: CardState::default(),
            timers: TimerQueue::new(),
            snapshot: None,
            pending_leave: false,
            decay_from: 0.0,
            decay_level: 0.0,
            hold_boost: 1.0,
            destroyed: false,
        }
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn transform_config(&self) -> &TransformConfig {
        &self.transform
    }

    /// Swap tilt limits, e.g. when the quality layer steps down.
    pub fn set_transform_config(&mut self, transform: TransformConfig) {
        self.transform = transform;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Remaining visual strength of the post-leave fade in `[0, 1]`. State
    /// intensity drops to zero immediately on leave; this is what the view
    /// layer multiplies its last frame by while the ramp runs.
    pub fn decay_level(&self) -> f32 {
        self.decay_level
    }

    pub fn is_decaying(&self) -> bool {
        self.decay_level > 0.0
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn handle_pointer_enter(&mut self) {
        if self.destroyed {
            return;
        }
        if self.state.is_animating {
            // back over the card before the flip ended; keep the snapshot
            self.pending_leave = false;
            return;
        }
        self.cancel_decay();
        self.state.is_hovering = true;
    }

    pub fn handle_pointer_move(&mut self, local: Vec2) {
        if self.destroyed {
            return;
        }
        if self.state.is_animating {
            self.pending_leave = false;
            return;
        }
        self.cancel_decay();
        if local.is_finite() {
            self.state.pointer_position = local;
        }
        self.state.is_hovering = true;
    }

    pub fn handle_pointer_leave(&mut self, now: Instant) {
        if self.destroyed {
            return;
        }
        if self.state.is_animating {
            self.pending_leave = true;
            return;
        }
        let from = self.state.holographic_intensity;
        self.hold_boost = 1.0;
        self.state.is_hovering = false;
        self.state.holographic_intensity = 0.0;
        self.state.pointer_position = Vec2::ZERO;
        self.start_decay(from, now);
    }

    pub fn can_flip(&self) -> bool {
        self.config.enable_flip && !self.state.is_animating && !self.destroyed
    }

    /// Begin a flip. Returns `false` without touching state when a flip is
    /// already running or flipping is disabled; concurrent requests are
    /// rejected, never queued. Completion is reported by `tick` as
    /// [`CardEvent::FlipCompleted`] once `animation_speed` has elapsed.
    pub fn start_flip(&mut self, now: Instant) -> bool {
        if !self.can_flip() {
            log::debug!(
                "[card] flip rejected (enabled={}, animating={})",
                self.config.enable_flip,
                self.state.is_animating
            );
            return false;
        }
        self.cancel_decay();
        self.snapshot = Some(HoverSnapshot {
            is_hovering: self.state.is_hovering,
            pointer_position: self.state.pointer_position,
        });
        self.pending_leave = false;
        self.hold_boost = 1.0;
        self.state.is_animating = true;
        self.state.holographic_intensity = 0.0;
        self.timers
            .schedule(now + self.config.animation_speed, CardTimer::FlipComplete);
        log::debug!("[card] flip started ({:?})", self.config.animation_speed);
        true
    }

    fn finish_flip(&mut self, now: Instant, out: &mut Vec<CardEvent>) {
        self.state.is_flipped = !self.state.is_flipped;
        self.state.is_animating = false;
        match self.snapshot.take() {
            Some(snap) => {
                self.state.is_hovering = snap.is_hovering;
                self.state.pointer_position = snap.pointer_position;
            }
            None => {
                log::warn!("[card] flip finished without a hover snapshot");
                self.state.is_hovering = false;
                self.state.pointer_position = Vec2::ZERO;
            }
        }
        if std::mem::take(&mut self.pending_leave) {
            self.handle_pointer_leave(now);
        }
        log::debug!("[card] flip completed, flipped={}", self.state.is_flipped);
        out.push(CardEvent::FlipCompleted {
            is_flipped: self.state.is_flipped,
        });
    }

    /// Effect for the front face at `client`, inside `bounds`.
    ///
    /// Side effect: the computed intensity and the element-local pointer are
    /// written back into state, so state always matches the last rendered
    /// frame. Skipped while a flip is running, which keeps intensity at zero
    /// for the whole animation. Use [`front_effect`] for a pure query.
    pub fn compute_effect(&mut self, client: Vec2, bounds: &Rect) -> EffectDescriptor {
        let mut effect = front_effect(client, bounds, self.config.style, &self.transform);
        self.commit(&mut effect, client, bounds);
        effect
    }

    /// Back-face counterpart of [`compute_effect`](Self::compute_effect),
    /// with the same state side effect.
    pub fn compute_back_effect(&mut self, client: Vec2, bounds: &Rect) -> EffectDescriptor {
        let mut effect = back_effect(client, bounds, self.config.style, &self.transform);
        self.commit(&mut effect, client, bounds);
        effect
    }

    /// `None` while flipping or not hovering; otherwise the face-specific
    /// effect.
    pub fn compute_effect_for_face(
        &mut self,
        is_flipped: bool,
        client: Vec2,
        bounds: &Rect,
    ) -> Option<EffectDescriptor> {
        if !self.should_apply_effects() {
            return None;
        }
        Some(if is_flipped {
            self.compute_back_effect(client, bounds)
        } else {
            self.compute_effect(client, bounds)
        })
    }

    fn commit(&mut self, effect: &mut EffectDescriptor, client: Vec2, bounds: &Rect) {
        if self.destroyed || self.state.is_animating {
            return;
        }
        if self.hold_boost > 1.0 {
            effect.intensity = (effect.intensity * self.hold_boost).min(MAX_HOLOGRAPHIC_INTENSITY);
        }
        self.state.holographic_intensity = effect.intensity;
        self.state.pointer_position = bounds.local_point(client);
    }

    pub fn should_apply_effects(&self) -> bool {
        !self.destroyed && self.state.is_hovering && !self.state.is_animating
    }

    pub fn handle_touch_start(&mut self, local: Vec2) {
        self.handle_pointer_enter();
        self.handle_pointer_move(local);
    }

    pub fn handle_touch_move(&mut self, local: Vec2) {
        self.handle_pointer_move(local);
    }

    /// A sustained press stands in for the continuous hover feedback touch
    /// devices lack.
    pub fn handle_touch_hold(&mut self) {
        if self.destroyed || self.state.is_animating {
            return;
        }
        self.hold_boost *= TOUCH_HOLD_BOOST;
        self.state.holographic_intensity =
            (self.state.holographic_intensity * TOUCH_HOLD_BOOST).min(MAX_HOLOGRAPHIC_INTENSITY);
    }

    pub fn hold_boost(&self) -> f32 {
        self.hold_boost
    }

    pub fn handle_touch_end(&mut self, now: Instant) {
        self.handle_pointer_leave(now);
    }

    pub fn tick(&mut self, now: Instant, out: &mut Vec<CardEvent>) {
        if self.destroyed {
            return;
        }
        for (_, timer) in self.timers.drain_due(now) {
            match timer {
                CardTimer::FlipComplete => self.finish_flip(now, out),
                CardTimer::DecayStep(step) => {
                    let t = step as f32 / DECAY_STEPS as f32;
                    let eased = 1.0 - (1.0 - t).powi(3);
                    self.decay_level = (1.0 - eased) * self.decay_from.min(1.0);
                    if step == DECAY_STEPS {
                        self.decay_level = 0.0;
                        out.push(CardEvent::DecayFinished);
                    }
                }
            }
        }
    }

    fn start_decay(&mut self, from: f32, now: Instant) {
        self.cancel_decay();
        if from <= 0.0 {
            return;
        }
        self.decay_from = from;
        self.decay_level = from.min(1.0);
        let step = DECAY_DURATION / DECAY_STEPS;
        for i in 1..=DECAY_STEPS {
            self.timers.schedule(now + step * i, CardTimer::DecayStep(i));
        }
    }

    fn cancel_decay(&mut self) {
        self.timers
            .cancel_where(|t| matches!(t, CardTimer::DecayStep(_)));
        self.decay_level = 0.0;
        self.decay_from = 0.0;
    }

    /// Back to the initial state with every timer cleared.
    pub fn reset(&mut self) {
        self.timers.clear();
        self.state = CardState::default();
        self.snapshot = None;
        self.pending_leave = false;
        self.decay_from = 0.0;
        self.decay_level = 0.0;
        self.hold_boost = 1.0;
    }

    /// Reset and stop responding. Later handler calls and ticks are no-ops.
    pub fn destroy(&mut self) {
        self.reset();
        self.destroyed = true;
    }
}
