// Pointer math properties: clamping, the center invariant and the reduced
// motion override.

use glam::Vec2;
use holocard_core::*;

const CARD: Rect = Rect::new(40.0, 80.0, 300.0, 420.0);

fn sweep() -> Vec<Vec2> {
    let mut points = Vec::new();
    for xi in -4..=14 {
        for yi in -4..=14 {
            points.push(Vec2::new(xi as f32 * 40.0, yi as f32 * 60.0));
        }
    }
    points
}

#[test]
fn outside_points_are_clamped_to_percent_range() {
    for p in sweep() {
        let pd = pointer_data(p, &CARD);
        assert!((0.0..=100.0).contains(&pd.x), "x={} for {p}", pd.x);
        assert!((0.0..=100.0).contains(&pd.y), "y={} for {p}", pd.y);
        assert!((0.0..=1.0).contains(&pd.from_center));
        assert!((0.0..=1.0).contains(&pd.from_top));
        assert!((0.0..=1.0).contains(&pd.from_left));
    }
}

#[test]
fn far_outside_matches_the_nearest_edge() {
    let a = pointer_data(Vec2::new(-5000.0, 100.0), &CARD);
    let b = pointer_data(Vec2::new(CARD.left, 100.0), &CARD);
    assert_eq!(a, b);
}

#[test]
fn center_is_neutral() {
    let pd = pointer_data(CARD.center(), &CARD);
    assert!(pd.from_center.abs() < 1e-5);
    let t = transform(&pd, &TransformConfig::desktop());
    assert!(t.rotate_x.abs() < 1e-4);
    assert!(t.rotate_y.abs() < 1e-4);
    assert!(t.translate_x.abs() < 1e-4);
    assert!((t.scale - INTERACTIVE_BASE_SCALE).abs() < 1e-5);
}

#[test]
fn reduced_motion_always_yields_identity() {
    for cfg in [TransformConfig::desktop(), TransformConfig::mobile()] {
        let cfg = cfg.with_reduced_motion(true);
        for p in sweep() {
            let t = transform(&pointer_data(p, &CARD), &cfg);
            assert_eq!(t, Transform::IDENTITY);
        }
    }
}

#[test]
fn zero_size_rect_returns_center_record() {
    let flat = Rect::new(10.0, 10.0, 0.0, 0.0);
    let pd = pointer_data(Vec2::new(500.0, -20.0), &flat);
    assert_eq!(pd, PointerData::CENTER);
    let t = transform(&pd, &TransformConfig::desktop());
    assert!(t.rotate_x.is_finite() && t.rotate_y.is_finite() && t.scale.is_finite());
}

#[test]
fn non_finite_input_is_treated_as_center() {
    let pd = pointer_data(Vec2::new(f32::INFINITY, f32::NAN), &CARD);
    assert!(pd.from_center.abs() < 1e-5);
    let nan_rect = Rect::new(f32::NAN, 0.0, 300.0, 420.0);
    assert_eq!(pointer_data(Vec2::new(10.0, 10.0), &nan_rect), PointerData::CENTER);
}

#[test]
fn top_left_tilts_back_and_left() {
    let t = transform(&pointer_data(Vec2::new(CARD.left, CARD.top), &CARD), &TransformConfig::desktop());
    // pointer above center tips the top edge toward the viewer
    assert!(t.rotate_x > 0.0);
    assert!(t.rotate_y < 0.0);
    assert!((t.rotate_y + 35.0 * 1.2).abs() < 1e-3);
    assert!((t.scale - (1.02 + 0.06)).abs() < 1e-5);
}

#[test]
fn intensity_scales_rotation_linearly() {
    let pd = pointer_data(Vec2::new(CARD.right(), CARD.center().y), &CARD);
    let full = transform(&pd, &TransformConfig::desktop());
    let half = transform(
        &pd,
        &TransformConfig {
            intensity: 0.5,
            ..TransformConfig::desktop()
        },
    );
    assert!((full.rotate_y - 2.0 * half.rotate_y).abs() < 1e-4);
}

#[test]
fn non_interactive_scale_starts_at_one() {
    let cfg = TransformConfig {
        interactive: false,
        ..TransformConfig::desktop()
    };
    let t = transform(&PointerData::CENTER, &cfg);
    assert_eq!(t.scale, 1.0);
}
