// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

const VARS: [&str; 7] = [
    VAR_GRADIENT_X,
    VAR_GRADIENT_Y,
    VAR_SPARKLE_X,
    VAR_SPARKLE_Y,
    VAR_GRADIENT_OPACITY,
    VAR_SPARKLE_OPACITY,
    VAR_INTENSITY,
];

#[test]
fn custom_properties_are_namespaced_and_distinct() {
    for (i, a) in VARS.iter().enumerate() {
        assert!(a.starts_with("--holo-"), "{a}");
        for b in &VARS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn attributes_are_data_attributes() {
    for attr in [
        ATTR_ANIMATION_SPEED,
        ATTR_ENABLE_FLIP,
        ATTR_HOLO_STYLE,
        ATTR_PREVENT_DOUBLE_CLICK,
    ] {
        assert!(attr.starts_with("data-"), "{attr}");
        assert_eq!(attr, attr.to_ascii_lowercase());
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rest_pose_is_flat_and_unscaled() {
    assert_eq!(REST_ROTATE_X, 0.0);
    assert_eq!(REST_ROTATE_Y, 0.0);
    assert_eq!(REST_SCALE, 1.0);
    assert!(FADE_EPSILON > 0.0 && FADE_EPSILON < 0.01);
}
