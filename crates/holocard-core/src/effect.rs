//! Pure effect math for the front and back faces. `CardInteraction` wraps
//! these with its state update; the functions here never touch state.

use glam::Vec2;

use crate::constants::*;
use crate::pointer::{pointer_data, transform, PointerData, Rect, Transform, TransformConfig};
use crate::style::HoloStyle;

/// Everything the view layer needs to paint one frame of the overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectDescriptor {
    /// Gradient center in percent of the card.
    pub gradient_position: Vec2,
    /// Sparkle layer center in percent of the card.
    pub sparkle_position: Vec2,
    pub gradient_opacity: f32,
    pub sparkle_opacity: f32,
    pub transform: Transform,
    pub intensity: f32,
    pub distance_ratio: f32,
}

impl EffectDescriptor {
    pub fn transform_css(&self) -> String {
        self.transform.to_css()
    }
}

/// Strength falloff from the card center: full at the center, 30% at the
/// corners, scaled by the style's base intensity.
#[inline]
pub fn falloff_intensity(style: HoloStyle, distance_ratio: f32) -> f32 {
    let multiplier = FALLOFF_FLOOR + (1.0 - distance_ratio.clamp(0.0, 1.0)) * FALLOFF_SPAN;
    style.base_intensity() * multiplier
}

#[inline]
fn pull_toward_center(percent: Vec2, factor: f32) -> Vec2 {
    Vec2::splat(50.0) + (percent - Vec2::splat(50.0)) * factor
}

fn describe(pointer: &PointerData, style: HoloStyle, config: &TransformConfig) -> EffectDescriptor {
    let intensity = falloff_intensity(style, pointer.from_center);
    let gradient_position = Vec2::new(pointer.x, pointer.y);
    EffectDescriptor {
        gradient_position,
        sparkle_position: pull_toward_center(gradient_position, SPARKLE_TRAVEL)
            .clamp(Vec2::ZERO, Vec2::splat(100.0)),
        gradient_opacity: (intensity * GRADIENT_OPACITY_SCALE)
            .clamp(GRADIENT_OPACITY_MIN, GRADIENT_OPACITY_MAX),
        sparkle_opacity: (intensity * SPARKLE_OPACITY_SCALE)
            .clamp(SPARKLE_OPACITY_MIN, SPARKLE_OPACITY_MAX),
        transform: transform(pointer, config),
        intensity,
        distance_ratio: pointer.from_center,
    }
}

pub fn front_effect(
    client: Vec2,
    bounds: &Rect,
    style: HoloStyle,
    config: &TransformConfig,
) -> EffectDescriptor {
    describe(&pointer_data(client, bounds), style, config)
}

/// Back face variant. The back has its own artwork, so the highlight stays
/// nearer the middle and gets a small opacity boost on top of the front
/// values for the same pointer.
pub fn back_effect(
    client: Vec2,
    bounds: &Rect,
    style: HoloStyle,
    config: &TransformConfig,
) -> EffectDescriptor {
    let front = describe(&pointer_data(client, bounds), style, config);
    EffectDescriptor {
        gradient_position: pull_toward_center(front.gradient_position, BACK_GRADIENT_PULL),
        sparkle_position: pull_toward_center(front.sparkle_position, BACK_SPARKLE_PULL),
        gradient_opacity: front.gradient_opacity * BACK_GRADIENT_OPACITY_BOOST,
        sparkle_opacity: front.sparkle_opacity * BACK_SPARKLE_OPACITY_BOOST,
        intensity: front.intensity * BACK_INTENSITY_BOOST,
        ..front
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect::new(0.0, 0.0, 300.0, 420.0);

    #[test]
    fn center_gets_full_style_intensity() {
        let e = front_effect(CARD.center(), &CARD, HoloStyle::Galaxy, &TransformConfig::desktop());
        assert!((e.intensity - 1.4).abs() < 1e-5);
        assert!((e.gradient_opacity - 0.7).abs() < 1e-6);
        assert!((e.sparkle_opacity - 0.8).abs() < 1e-6);
    }

    #[test]
    fn corner_hits_opacity_floors() {
        let e = front_effect(Vec2::ZERO, &CARD, HoloStyle::Aurora, &TransformConfig::desktop());
        assert!((e.intensity - 0.9 * 0.3).abs() < 1e-5);
        assert_eq!(e.gradient_opacity, GRADIENT_OPACITY_MIN);
        assert_eq!(e.sparkle_opacity, SPARKLE_OPACITY_MIN);
    }

    #[test]
    fn sparkles_travel_less_than_gradient() {
        let e = front_effect(Vec2::new(300.0, 0.0), &CARD, HoloStyle::Basic, &TransformConfig::desktop());
        assert_eq!(e.gradient_position, Vec2::new(100.0, 0.0));
        assert_eq!(e.sparkle_position, Vec2::new(75.0, 25.0));
    }

    #[test]
    fn back_face_pulls_positions_inward() {
        let cfg = TransformConfig::desktop();
        let p = Vec2::new(300.0, 420.0);
        let front = front_effect(p, &CARD, HoloStyle::Basic, &cfg);
        let back = back_effect(p, &CARD, HoloStyle::Basic, &cfg);
        assert!(back.gradient_position.x < front.gradient_position.x);
        assert!(back.sparkle_position.y < front.sparkle_position.y);
        assert!(back.intensity > front.intensity);
        assert_eq!(back.transform, front.transform);
    }
}
