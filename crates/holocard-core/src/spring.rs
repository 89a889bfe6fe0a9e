//! Per-frame damped spring used to smooth tilt, gradient position and
//! intensity toward a moving target.

use glam::{Vec2, Vec3};
use std::ops::{Add, Mul, Sub};

/// Values a [`Spring`] can drive. Every channel shares the same tuning.
pub trait SpringValue:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
    const ZERO: Self;
    /// Largest absolute channel, used for the settle test.
    fn max_abs(self) -> f32;
}

impl SpringValue for f32 {
    const ZERO: Self = 0.0;
    #[inline]
    fn max_abs(self) -> f32 {
        self.abs()
    }
}

impl SpringValue for Vec2 {
    const ZERO: Self = Vec2::ZERO;
    #[inline]
    fn max_abs(self) -> f32 {
        self.abs().max_element()
    }
}

impl SpringValue for Vec3 {
    const ZERO: Self = Vec3::ZERO;
    #[inline]
    fn max_abs(self) -> f32 {
        self.abs().max_element()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub precision: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SpringPreset {
    Smooth,
    Responsive,
    #[default]
    Holographic,
    Quick,
    Gentle,
}

const PRESET_PRECISION: f32 = 0.01;

impl SpringPreset {
    pub const ALL: [SpringPreset; 5] = [
        SpringPreset::Smooth,
        SpringPreset::Responsive,
        SpringPreset::Holographic,
        SpringPreset::Quick,
        SpringPreset::Gentle,
    ];

    pub const fn config(self) -> SpringConfig {
        let (stiffness, damping) = match self {
            SpringPreset::Smooth => (0.15, 0.8),
            SpringPreset::Responsive => (0.3, 0.7),
            SpringPreset::Holographic => (0.2, 0.75),
            SpringPreset::Quick => (0.4, 0.6),
            SpringPreset::Gentle => (0.1, 0.9),
        };
        SpringConfig {
            stiffness,
            damping,
            precision: PRESET_PRECISION,
        }
    }
}

impl From<SpringPreset> for SpringConfig {
    fn from(preset: SpringPreset) -> Self {
        preset.config()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        SpringPreset::default().config()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Spring<T: SpringValue> {
    value: T,
    velocity: T,
    target: T,
    config: SpringConfig,
}

impl<T: SpringValue> Spring<T> {
    /// A spring resting at `value`.
    pub fn new(value: T, config: impl Into<SpringConfig>) -> Self {
        Self {
            value,
            velocity: T::ZERO,
            target: value,
            config: config.into(),
        }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> T {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> T {
        self.target
    }

    #[inline]
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Retune without disturbing the motion in flight.
    pub fn set_config(&mut self, config: impl Into<SpringConfig>) {
        self.config = config.into();
    }

    /// Move the target. Velocity is kept, which is what produces the
    /// overshoot-then-settle feel when the pointer changes direction.
    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Jump straight to `value` and stop.
    pub fn snap_to(&mut self, value: T) {
        self.value = value;
        self.target = value;
        self.velocity = T::ZERO;
    }

    /// Advance one scheduler tick. Returns `true` once settled.
    pub fn step(&mut self) -> bool {
        let SpringConfig {
            stiffness, damping, ..
        } = self.config;
        self.value = self.value + self.velocity;
        self.velocity = (self.velocity + (self.target - self.value) * stiffness) * damping;
        self.is_settled()
    }

    pub fn step_frames(&mut self, frames: u32) -> bool {
        for _ in 0..frames {
            if self.step() {
                return true;
            }
        }
        self.is_settled()
    }

    /// Both the remaining distance and the velocity are below `precision`
    /// on every channel. Checking velocity too keeps a spring that is
    /// sweeping through its target from reporting settled mid-overshoot.
    pub fn is_settled(&self) -> bool {
        let p = self.config.precision;
        (self.target - self.value).max_abs() < p && self.velocity.max_abs() < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_tuning_table() {
        let h = SpringPreset::Holographic.config();
        assert_eq!((h.stiffness, h.damping), (0.2, 0.75));
        let g = SpringPreset::Gentle.config();
        assert_eq!((g.stiffness, g.damping), (0.1, 0.9));
        for preset in SpringPreset::ALL {
            let c = preset.config();
            assert!(c.damping < 1.0 && c.stiffness > 0.0);
        }
    }

    #[test]
    fn new_spring_is_settled() {
        let s = Spring::new(Vec2::new(3.0, 4.0), SpringPreset::Quick);
        assert!(s.is_settled());
    }

    #[test]
    fn first_step_only_builds_velocity() {
        let mut s = Spring::new(0.0_f32, SpringPreset::Responsive);
        s.set_target(10.0);
        s.step();
        assert_eq!(s.value(), 0.0);
        assert!((s.velocity() - 10.0 * 0.3 * 0.7).abs() < 1e-5);
    }
}
