// Host-side tests for the hover / click / jump controller.

use glam::Vec3;
use portfolio_core::{
    CursorStyle, InteractiveObject, JumpPhase, ObjectPlacement, HOVER_SCALE, REST_SCALE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPS: f32 = 1e-5;

fn object() -> InteractiveObject {
    InteractiveObject::new(ObjectPlacement::new("Saturn", Vec3::new(-8.0, 4.0, -10.0)))
}

#[test]
fn click_rises_past_apex_then_falls_to_rest() {
    let mut obj = object();
    obj.click();
    assert_eq!(obj.phase(), JumpPhase::Rising);

    obj.update(0.1);
    assert!((obj.vertical_offset() - 0.4).abs() < EPS);
    obj.update(0.1);
    assert!((obj.vertical_offset() - 0.8).abs() < EPS);
    obj.update(0.1);
    assert!((obj.vertical_offset() - 1.2).abs() < EPS);
    // Crossing the apex ends the rise
    assert_eq!(obj.phase(), JumpPhase::Falling);
    assert!(!obj.state().clicked);

    obj.update(0.1);
    assert!((obj.vertical_offset() - 0.9).abs() < EPS);
    obj.update(0.3);
    assert!(obj.vertical_offset() < EPS);
    obj.update(0.1);
    assert_eq!(obj.vertical_offset(), 0.0);
    assert_eq!(obj.phase(), JumpPhase::Rest);
}

#[test]
fn rest_object_does_not_move() {
    let mut obj = object();
    for _ in 0..10 {
        obj.update(0.016);
    }
    assert_eq!(obj.vertical_offset(), 0.0);
    assert_eq!(obj.phase(), JumpPhase::Rest);
}

#[test]
fn fall_is_clamped_at_zero() {
    let mut obj = object();
    obj.click();
    obj.update(0.3); // 1.2, past the apex
    obj.update(10.0);
    assert_eq!(obj.vertical_offset(), 0.0);
}

#[test]
fn hover_scales_and_requests_cursor() {
    let mut obj = object();
    assert_eq!(obj.scale_factor(), REST_SCALE);

    assert_eq!(obj.hover_enter(), Some(CursorStyle::Pointer));
    assert_eq!(obj.scale_factor(), HOVER_SCALE);
    assert!((obj.scale_factor() - 1.15).abs() < EPS);
    // Repeated enter is not a change
    assert_eq!(obj.hover_enter(), None);

    assert_eq!(obj.hover_exit(), Some(CursorStyle::Auto));
    assert_eq!(obj.scale_factor(), REST_SCALE);
    assert_eq!(obj.hover_exit(), None);
}

#[test]
fn hover_does_not_affect_jump() {
    let mut obj = object();
    obj.hover_enter();
    obj.update(0.5);
    assert_eq!(obj.vertical_offset(), 0.0);
    assert!(!obj.label_visible());
}

#[test]
fn click_toggles_label_each_time() {
    let mut obj = object();
    assert!(!obj.label_visible());
    obj.click();
    assert!(obj.label_visible());
    obj.click();
    assert!(!obj.label_visible());
    obj.click();
    assert!(obj.label_visible());
}

#[test]
fn click_mid_jump_continues_from_current_offset() {
    let mut obj = object();
    obj.click();
    obj.update(0.3); // 1.2
    obj.update(0.1); // falling to 0.9
    assert!((obj.vertical_offset() - 0.9).abs() < EPS);

    obj.click();
    assert_eq!(obj.phase(), JumpPhase::Rising);
    obj.update(0.05);
    assert!((obj.vertical_offset() - 1.1).abs() < EPS);
    assert_eq!(obj.phase(), JumpPhase::Falling);
}

#[test]
fn click_while_rising_keeps_rising() {
    let mut obj = object();
    obj.click();
    obj.update(0.1); // 0.4
    obj.click();
    obj.update(0.1);
    assert!((obj.vertical_offset() - 0.8).abs() < EPS);
    assert_eq!(obj.phase(), JumpPhase::Rising);
}

#[test]
fn invalid_deltas_are_ignored() {
    let mut obj = object();
    obj.click();
    obj.update(0.1);
    let before = obj.vertical_offset();
    obj.update(-1.0);
    obj.update(f32::NAN);
    obj.update(f32::INFINITY);
    assert_eq!(obj.vertical_offset(), before);
}

#[test]
fn offset_never_negative_under_random_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut obj = object();
    for _ in 0..2_000 {
        if rng.gen_bool(0.05) {
            obj.click();
        }
        obj.update(rng.gen_range(0.0..0.2));
        assert!(obj.vertical_offset() >= 0.0);
        if obj.vertical_offset() > 1.0 {
            assert_ne!(obj.phase(), JumpPhase::Rising);
        }
    }
}

#[test]
fn label_anchor_uses_size_and_scale() {
    let base = Vec3::new(10.0, 5.0, -15.0);
    let plain = InteractiveObject::new(ObjectPlacement::new("Explorer", base));
    assert!((plain.label_anchor() - (base + Vec3::Y * 1.5)).length() < EPS);

    let sized = InteractiveObject::new(
        ObjectPlacement::new("Neptune", base)
            .with_size(1.5)
            .with_scale(2.0),
    );
    // (1.5 * 1.5 + 0.5) * 2.0
    assert!((sized.label_anchor() - (base + Vec3::Y * 5.5)).length() < EPS);
}

#[test]
fn label_anchor_ignores_jump() {
    let mut obj = object();
    let rest = obj.label_anchor();
    obj.click();
    obj.update(0.2);
    assert_eq!(obj.label_anchor(), rest);
}
