//! Turns core output into the strings written to the card element.

use crate::constants::*;
use glam::Vec3;
use holocard_core::{EffectDescriptor, QualityLevel, QualityProfile, Transform};

pub type CssVar = (&'static str, String);

#[inline]
pub fn quality_class(level: QualityLevel) -> String {
    format!("{}{}", QUALITY_CLASS_PREFIX, level.name())
}

pub const REST: Vec3 = Vec3::new(REST_ROTATE_X, REST_ROTATE_Y, REST_SCALE);

/// Spring target for the tilt channels; the card rests flat when there is
/// nothing to show.
#[inline]
pub fn transform_target(effect: Option<&EffectDescriptor>) -> Vec3 {
    effect.map_or(REST, |e| {
        Vec3::new(e.transform.rotate_x, e.transform.rotate_y, e.transform.scale)
    })
}

/// Smoothed rotation and scale from the spring; translation follows the
/// pointer directly.
pub fn smoothed_transform(spring: Vec3, effect: Option<&EffectDescriptor>) -> Transform {
    let (translate_x, translate_y) =
        effect.map_or((0.0, 0.0), |e| (e.transform.translate_x, e.transform.translate_y));
    Transform {
        rotate_x: spring.x,
        rotate_y: spring.y,
        scale: spring.z,
        translate_x,
        translate_y,
    }
}

/// Overlay custom properties for one frame. `fade` scales the opacities,
/// so the last live frame can be replayed while the leave ramp runs.
pub fn overlay_vars(effect: &EffectDescriptor, fade: f32, profile: &QualityProfile) -> [CssVar; 7] {
    let fade = fade.clamp(0.0, 1.0);
    let sparkle_opacity = if profile.sparkles {
        effect.sparkle_opacity * fade
    } else {
        0.0
    };
    [
        (VAR_GRADIENT_X, format!("{:.2}%", effect.gradient_position.x)),
        (VAR_GRADIENT_Y, format!("{:.2}%", effect.gradient_position.y)),
        (VAR_SPARKLE_X, format!("{:.2}%", effect.sparkle_position.x)),
        (VAR_SPARKLE_Y, format!("{:.2}%", effect.sparkle_position.y)),
        (VAR_GRADIENT_OPACITY, format!("{:.3}", effect.gradient_opacity * fade)),
        (VAR_SPARKLE_OPACITY, format!("{:.3}", sparkle_opacity)),
        (VAR_INTENSITY, format!("{:.3}", effect.intensity * fade)),
    ]
}

/// Overlay fully hidden.
pub fn cleared_vars() -> [CssVar; 3] {
    [
        (VAR_GRADIENT_OPACITY, "0".to_string()),
        (VAR_SPARKLE_OPACITY, "0".to_string()),
        (VAR_INTENSITY, "0".to_string()),
    ]
}
