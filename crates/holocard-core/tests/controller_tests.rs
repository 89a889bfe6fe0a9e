// Input routing: touch/mouse arbitration in front of the card.

use glam::Vec2;
use holocard_core::*;
use instant::Instant;
use std::time::Duration;

const BOUNDS: Rect = Rect::new(20.0, 40.0, 300.0, 420.0);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn controller(prevent_double_click: bool) -> CardController {
    let mut c = CardController::new(
        CardConfig {
            prevent_double_click,
            ..CardConfig::default()
        },
        TransformConfig::mobile(),
        TouchConfig::default(),
    );
    c.set_bounds(BOUNDS);
    c
}

#[test]
fn tap_flips_once_and_swallows_the_synthetic_click() {
    let mut c = controller(true);
    let t0 = Instant::now();
    let p = BOUNDS.center();
    c.touch_start(p, t0);
    let g = c.touch_end(p, t0 + ms(80)).unwrap();
    assert_eq!(g.kind, GestureKind::Tap);
    assert!(c.card().state().is_animating);

    assert_eq!(c.pointer_enter(t0 + ms(90)), Routed::Suppressed);
    assert_eq!(c.click(t0 + ms(100)), Routed::Suppressed);

    let mut events = Vec::new();
    c.tick(t0 + ms(80) + DEFAULT_ANIMATION_SPEED, &mut events);
    assert!(events.contains(&ControllerEvent::Card(CardEvent::FlipCompleted { is_flipped: true })));
    assert!(events.contains(&ControllerEvent::SuppressionEnded));

    // outside the window a click is a real click
    assert_eq!(c.click(t0 + ms(800)), Routed::Handled);
}

#[test]
fn without_prevention_the_trailing_click_is_only_rejected_by_the_flip_guard() {
    let mut c = controller(false);
    let t0 = Instant::now();
    let p = BOUNDS.center();
    c.touch_start(p, t0);
    c.touch_end(p, t0 + ms(80));
    assert_eq!(c.click(t0 + ms(100)), Routed::Rejected);

    let mut events = Vec::new();
    c.tick(t0 + ms(2000), &mut events);
    let flips = events
        .iter()
        .filter(|e| matches!(e, ControllerEvent::Card(CardEvent::FlipCompleted { .. })))
        .count();
    assert_eq!(flips, 1);
}

#[test]
fn swipe_does_not_flip() {
    let mut c = controller(true);
    let t0 = Instant::now();
    let p = BOUNDS.center();
    c.touch_start(p, t0);
    c.touch_move(p + Vec2::new(60.0, 0.0), t0 + ms(40));
    let g = c.touch_end(p + Vec2::new(60.0, 0.0), t0 + ms(90)).unwrap();
    assert_eq!(g.kind, GestureKind::Move);
    assert!(!c.card().state().is_animating);
}

#[test]
fn hold_boosts_sampled_intensity() {
    let mut c = controller(true);
    let t0 = Instant::now();
    c.touch_start(BOUNDS.center(), t0);
    let before = c.sample_effect().unwrap().intensity;

    let mut events = Vec::new();
    c.tick(t0 + HOLD_DELAY, &mut events);
    assert_eq!(events, vec![ControllerEvent::HoldStarted]);
    let after = c.sample_effect().unwrap().intensity;
    assert!((after - before * TOUCH_HOLD_BOOST).abs() < 1e-5);
}

#[test]
fn pointer_moves_are_stored_element_local() {
    let mut c = controller(true);
    let t0 = Instant::now();
    c.pointer_enter(t0);
    c.pointer_move(Vec2::new(70.0, 90.0), t0);
    assert_eq!(c.card().state().pointer_position, Vec2::new(50.0, 50.0));
    let e = c.sample_effect().unwrap();
    assert!(e.gradient_position.x < 50.0 && e.gradient_position.y < 50.0);
    c.pointer_leave(t0 + ms(10));
    assert!(c.sample_effect().is_none());
}

#[test]
fn focus_shows_centered_effect_and_blur_hides_it() {
    let mut c = controller(true);
    let t0 = Instant::now();
    c.focus();
    let e = c.sample_effect().unwrap();
    assert!(e.distance_ratio.abs() < 1e-5);
    assert_eq!(c.activate(t0), Routed::Handled);
    assert_eq!(c.activate(t0 + ms(1)), Routed::Rejected);
    c.blur(t0 + ms(2));
    let mut events = Vec::new();
    c.tick(t0 + ms(2000), &mut events);
    assert!(!c.card().state().is_hovering);
}

#[test]
fn destroy_stops_everything() {
    let mut c = controller(true);
    let t0 = Instant::now();
    c.touch_start(BOUNDS.center(), t0);
    c.destroy();
    let mut events = Vec::new();
    c.tick(t0 + ms(5000), &mut events);
    assert!(events.is_empty());
    assert_eq!(c.click(t0 + ms(5001)), Routed::Rejected);
    assert!(c.sample_effect().is_none());
}
