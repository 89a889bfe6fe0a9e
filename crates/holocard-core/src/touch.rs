//! Touch gesture classification and touch/mouse arbitration.
//!
//! Browsers replay a touch as synthetic mouse events shortly after
//! `touchend`. Without arbitration a tap would flip the card twice: once
//! for the tap gesture and once for the trailing click. The arbiter tracks
//! the first contact point only and keeps a suppression window open for
//! `prevent_mouse_delay` after release.

use glam::Vec2;
use instant::Instant;
use std::time::Duration;

use crate::constants::{HOLD_DELAY, MOVE_THRESHOLD_PX, PREVENT_MOUSE_DELAY, TAP_TIME_THRESHOLD};
use crate::error::ConfigError;
use crate::timer::{elapsed_between, TimerHandle, TimerQueue};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchConfig {
    pub hold_delay: Duration,
    pub move_threshold: f32,
    pub tap_time_threshold: Duration,
    pub prevent_mouse_delay: Duration,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            hold_delay: HOLD_DELAY,
            move_threshold: MOVE_THRESHOLD_PX,
            tap_time_threshold: TAP_TIME_THRESHOLD,
            prevent_mouse_delay: PREVENT_MOUSE_DELAY,
        }
    }
}

impl TouchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.move_threshold.is_finite() || self.move_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold {
                field: "move_threshold",
                value: self.move_threshold,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Tap,
    Hold,
    Move,
    Cancel,
}

/// Completed touch sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub kind: GestureKind,
    pub start: Vec2,
    pub end: Vec2,
    pub duration: Duration,
    pub distance: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Idle,
    Active,
    /// Released, but synthetic mouse events are still being swallowed.
    Suppressing,
}

/// Deferred notifications drained by [`TouchArbiter::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchSignal {
    /// The finger stayed down and still for `hold_delay`.
    HoldStarted { position: Vec2 },
    SuppressionEnded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TouchTimer {
    Hold,
    ClearSuppression,
}

#[derive(Clone, Copy, Debug)]
struct TouchSession {
    start: Vec2,
    started_at: Instant,
    last: Vec2,
    // one-way: once past the threshold the touch can only end as a move
    moved: bool,
    hold_timer: Option<TimerHandle>,
}

#[derive(Debug, Default)]
pub struct TouchArbiter {
    config: TouchConfig,
    session: Option<TouchSession>,
    suppress_until: Option<Instant>,
    suppress_mouse: bool,
    timers: TimerQueue<TouchTimer>,
}

impl TouchArbiter {
    pub fn new(config: TouchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Begin a fresh session. An unfinished session is discarded rather
    /// than merged; the browser never delivers a second `touchstart` for the
    /// first contact without an end or cancel in between.
    pub fn touch_start(&mut self, point: Vec2, now: Instant) {
        if self.session.is_some() {
            log::debug!("[touch] restart over an unfinished session");
        }
        self.timers.clear();
        let start = if point.is_finite() { point } else { Vec2::ZERO };
        let hold_timer = self.timers.schedule(now + self.config.hold_delay, TouchTimer::Hold);
        self.session = Some(TouchSession {
            start,
            started_at: now,
            last: start,
            moved: false,
            hold_timer: Some(hold_timer),
        });
        self.suppress_mouse = true;
        self.suppress_until = None;
    }

    pub fn touch_move(&mut self, point: Vec2, _now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let point = if point.is_finite() { point } else { session.start };
        session.last = point;
        if !session.moved && point.distance(session.start) > self.config.move_threshold {
            session.moved = true;
            if let Some(h) = session.hold_timer.take() {
                self.timers.cancel(h);
            }
        }
    }

    pub fn touch_end(&mut self, point: Vec2, now: Instant) -> Option<Gesture> {
        let session = self.session.take()?;
        let end = if point.is_finite() { point } else { session.start };
        let distance = end.distance(session.start);
        let duration = elapsed_between(now, session.started_at);

        let kind = if session.moved || distance >= self.config.move_threshold {
            GestureKind::Move
        } else if duration <= self.config.tap_time_threshold {
            GestureKind::Tap
        } else {
            GestureKind::Hold
        };
        self.release(now);
        log::debug!("[touch] {:?} after {:?}, {:.1}px", kind, duration, distance);

        Some(Gesture {
            kind,
            start: session.start,
            end,
            duration,
            distance,
        })
    }

    pub fn touch_cancel(&mut self, now: Instant) -> Option<Gesture> {
        let session = self.session.take()?;
        self.release(now);
        Some(Gesture {
            kind: GestureKind::Cancel,
            start: session.start,
            end: session.last,
            duration: elapsed_between(now, session.started_at),
            distance: 0.0,
        })
    }

    fn release(&mut self, now: Instant) {
        self.timers.clear();
        let until = now + self.config.prevent_mouse_delay;
        self.suppress_until = Some(until);
        self.timers.schedule(until, TouchTimer::ClearSuppression);
    }

    pub fn tick(&mut self, now: Instant, out: &mut Vec<TouchSignal>) {
        for (handle, timer) in self.timers.drain_due(now) {
            match timer {
                TouchTimer::Hold => {
                    if let Some(session) = self.session.as_mut() {
                        if session.hold_timer == Some(handle) && !session.moved {
                            session.hold_timer = None;
                            out.push(TouchSignal::HoldStarted {
                                position: session.last,
                            });
                        }
                    }
                }
                TouchTimer::ClearSuppression => {
                    if self.session.is_none() {
                        self.suppress_mouse = false;
                        self.suppress_until = None;
                        out.push(TouchSignal::SuppressionEnded);
                    }
                }
            }
        }
    }

    /// Callers must drop mouse events while this is true. Checks the window
    /// deadline directly so a caller that has not ticked yet still gets the
    /// right answer.
    pub fn should_suppress_mouse_event(&self, now: Instant) -> bool {
        if self.session.is_some() {
            return true;
        }
        self.suppress_mouse && self.suppress_until.map_or(false, |until| now < until)
    }

    pub fn phase(&self, now: Instant) -> TouchPhase {
        if self.session.is_some() {
            TouchPhase::Active
        } else if self.should_suppress_mouse_event(now) {
            TouchPhase::Suppressing
        } else {
            TouchPhase::Idle
        }
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn reset(&mut self) {
        self.timers.clear();
        self.session = None;
        self.suppress_mouse = false;
        self.suppress_until = None;
    }
}
