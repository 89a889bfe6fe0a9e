//! Pointer math: raw client coordinates to normalized pointer data and the
//! derived 3D tilt. Every function here is pure.

use glam::Vec2;
use std::fmt;

use crate::constants::*;

/// Axis-aligned element bounds in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Zero, negative or non-finite extents. Distance math is meaningless
    /// on such a rect, so callers get the neutral center record instead.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0)
    }

    /// Element-local pixel position of `client`, clamped to the element.
    pub fn local_point(&self, client: Vec2) -> Vec2 {
        if self.is_degenerate() {
            return Vec2::ZERO;
        }
        let center = self.center();
        let x = if client.x.is_finite() { client.x } else { center.x };
        let y = if client.y.is_finite() { client.y } else { center.y };
        Vec2::new(
            (x - self.left).clamp(0.0, self.width),
            (y - self.top).clamp(0.0, self.height),
        )
    }
}

/// Normalized pointer position relative to an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerData {
    /// Horizontal position in percent, `[0, 100]`.
    pub x: f32,
    /// Vertical position in percent, `[0, 100]`.
    pub y: f32,
    /// Distance from the element center over the half diagonal, `[0, 1]`.
    pub from_center: f32,
    pub from_top: f32,
    pub from_left: f32,
}

impl PointerData {
    pub const CENTER: PointerData = PointerData {
        x: 50.0,
        y: 50.0,
        from_center: 0.0,
        from_top: 0.5,
        from_left: 0.5,
    };

    /// Signed offsets from the center in `[-1, 1]`.
    #[inline]
    pub fn deltas(&self) -> Vec2 {
        Vec2::new((self.x - 50.0) / 50.0, (self.y - 50.0) / 50.0)
    }
}

impl Default for PointerData {
    fn default() -> Self {
        Self::CENTER
    }
}

pub fn pointer_data(client: Vec2, rect: &Rect) -> PointerData {
    if rect.is_degenerate() {
        return PointerData::CENTER;
    }
    let local = rect.local_point(client);
    let from_left = local.x / rect.width;
    let from_top = local.y / rect.height;

    let half = Vec2::new(rect.width * 0.5, rect.height * 0.5);
    let half_diagonal = half.length();
    let from_center = if half_diagonal > 0.0 {
        ((local - half).length() / half_diagonal).min(1.0)
    } else {
        0.0
    };

    PointerData {
        x: from_left * 100.0,
        y: from_top * 100.0,
        from_center,
        from_top,
        from_left,
    }
}

/// Tilt tuning. `desktop()` and `mobile()` carry the two standard limits;
/// choosing between them is the caller's job.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformConfig {
    pub intensity: f32,
    pub max_rotation_deg: f32,
    pub max_translate_px: f32,
    pub interactive: bool,
    pub reduced_motion: bool,
}

impl TransformConfig {
    pub const fn desktop() -> Self {
        Self {
            intensity: 1.0,
            max_rotation_deg: DESKTOP_MAX_ROTATION_DEG,
            max_translate_px: DESKTOP_MAX_TRANSLATE_PX,
            interactive: true,
            reduced_motion: false,
        }
    }

    pub const fn mobile() -> Self {
        Self {
            intensity: 1.0,
            max_rotation_deg: MOBILE_MAX_ROTATION_DEG,
            max_translate_px: MOBILE_MAX_TRANSLATE_PX,
            interactive: true,
            reduced_motion: false,
        }
    }

    pub const fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self::desktop()
    }
}

/// Tilt output: rotations in degrees, translation in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({:.4}) translate3d({:.2}px, {:.2}px, 0px)",
            PERSPECTIVE_PX, self.rotate_x, self.rotate_y, self.scale, self.translate_x, self.translate_y
        )
    }
}

pub fn transform(pointer: &PointerData, config: &TransformConfig) -> Transform {
    let delta = pointer.deltas();
    let distance_multiplier = pointer.from_center.max(0.0).powf(ROTATION_FALLOFF_EXPONENT);
    let rotation_intensity = ROTATION_INTENSITY_BASE + distance_multiplier * ROTATION_INTENSITY_SPAN;
    let rotation = config.max_rotation_deg * rotation_intensity * config.intensity;
    let base_scale = if config.interactive {
        INTERACTIVE_BASE_SCALE
    } else {
        1.0
    };

    let out = Transform {
        rotate_x: -delta.y * rotation,
        rotate_y: delta.x * rotation,
        scale: base_scale + pointer.from_center * SCALE_FROM_CENTER,
        translate_x: delta.x * config.max_translate_px * config.intensity,
        translate_y: delta.y * config.max_translate_px * config.intensity,
    };

    // must stay last: reduced motion overrides everything above
    if config.reduced_motion {
        return Transform::IDENTITY;
    }
    out
}

/// One integration step of the free Y-axis spin flourish.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinStep {
    pub rotation: f32,
    pub velocity: f32,
    pub is_complete: bool,
}

pub fn spin_physics(current: f32, target: f32, velocity: f32, damping: f32) -> SpinStep {
    let velocity = (velocity + (target - current) * SPIN_PULL) * damping;
    SpinStep {
        rotation: current + velocity,
        velocity,
        is_complete: velocity.abs() < SPIN_COMPLETE_VELOCITY,
    }
}
