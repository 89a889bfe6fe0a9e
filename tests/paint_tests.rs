// Host-side tests for the CSS output helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/paint.rs"]
mod paint;

use constants::*;
use glam::{Vec2, Vec3};
use holocard_core::{front_effect, HoloStyle, QualityLevel, Rect, TransformConfig};
use paint::*;

const CARD: Rect = Rect::new(0.0, 0.0, 300.0, 420.0);

fn var<'a>(vars: &'a [CssVar], name: &str) -> &'a str {
    vars.iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v.as_str())
        .unwrap()
}

#[test]
fn quality_classes() {
    assert_eq!(quality_class(QualityLevel::High), "quality-high");
    assert_eq!(quality_class(QualityLevel::Minimal), "quality-minimal");
}

#[test]
fn rest_target_without_effect() {
    assert_eq!(transform_target(None), Vec3::new(0.0, 0.0, 1.0));
    let t = smoothed_transform(REST, None);
    assert_eq!(t, holocard_core::Transform::IDENTITY);
}

#[test]
fn target_tracks_effect_tilt() {
    let e = front_effect(Vec2::ZERO, &CARD, HoloStyle::Basic, &TransformConfig::desktop());
    let target = transform_target(Some(&e));
    assert_eq!(target.x, e.transform.rotate_x);
    assert_eq!(target.y, e.transform.rotate_y);
    assert_eq!(target.z, e.transform.scale);

    let t = smoothed_transform(Vec3::new(1.0, 2.0, 1.01), Some(&e));
    assert_eq!(t.rotate_x, 1.0);
    assert_eq!(t.translate_x, e.transform.translate_x);
}

#[test]
fn overlay_vars_format_percentages_and_opacities() {
    let e = front_effect(CARD.center(), &CARD, HoloStyle::Basic, &TransformConfig::desktop());
    let vars = overlay_vars(&e, 1.0, &QualityLevel::High.profile());
    assert_eq!(var(&vars, VAR_GRADIENT_X), "50.00%");
    assert_eq!(var(&vars, VAR_SPARKLE_Y), "50.00%");
    assert_eq!(var(&vars, VAR_GRADIENT_OPACITY), "0.600");
    assert_eq!(var(&vars, VAR_SPARKLE_OPACITY), "0.700");
    assert_eq!(var(&vars, VAR_INTENSITY), "1.000");
}

#[test]
fn fade_scales_opacity_only() {
    let e = front_effect(CARD.center(), &CARD, HoloStyle::Basic, &TransformConfig::desktop());
    let vars = overlay_vars(&e, 0.5, &QualityLevel::High.profile());
    assert_eq!(var(&vars, VAR_GRADIENT_X), "50.00%");
    assert_eq!(var(&vars, VAR_GRADIENT_OPACITY), "0.300");
    assert_eq!(var(&vars, VAR_INTENSITY), "0.500");
}

#[test]
fn low_quality_hides_sparkles() {
    let e = front_effect(CARD.center(), &CARD, HoloStyle::Basic, &TransformConfig::desktop());
    let vars = overlay_vars(&e, 1.0, &QualityLevel::Low.profile());
    assert_eq!(var(&vars, VAR_SPARKLE_OPACITY), "0.000");
    assert_eq!(var(&vars, VAR_GRADIENT_OPACITY), "0.600");
}

#[test]
fn cleared_vars_zero_the_overlay() {
    for (_, v) in cleared_vars() {
        assert_eq!(v, "0");
    }
}
