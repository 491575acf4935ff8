// Host-side tests for pure pointer helpers.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

const EPS: f32 = 1e-5;

#[test]
fn css_px_to_ndc_corners_and_center() {
    assert_eq!(css_px_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(css_px_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(css_px_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
}

#[test]
fn css_px_to_ndc_zero_size_is_finite() {
    let ndc = css_px_to_ndc(10.0, 10.0, 0.0, 0.0);
    assert!(ndc.x.is_finite() && ndc.y.is_finite());
}

#[test]
fn ndc_round_trip() {
    let p = Vec2::new(123.0, 456.0);
    let ndc = css_px_to_ndc(p.x, p.y, 1024.0, 768.0);
    let back = ndc_to_css_px(ndc.x, ndc.y, 1024.0, 768.0);
    assert!((back - p).length() < 1e-3);
}

#[test]
fn world_size_scales_with_distance() {
    let fov = 60f32.to_radians();
    let near = world_size_to_css_px(0.4, 10.0, fov, 800.0);
    let far = world_size_to_css_px(0.4, 20.0, fov, 800.0);
    assert!((near / far - 2.0).abs() < EPS);
    // Full visible height maps to the viewport height
    let visible = 2.0 * (fov * 0.5).tan() * 10.0;
    assert!((world_size_to_css_px(visible, 10.0, fov, 800.0) - 800.0).abs() < 1e-2);
}

#[test]
fn drag_threshold() {
    assert!(!exceeds_drag_threshold(3.0, 0.0, 4.0));
    assert!(!exceeds_drag_threshold(0.0, 4.0, 4.0));
    assert!(exceeds_drag_threshold(3.0, 3.0, 4.0));
}

#[test]
fn small_wiggle_is_still_a_click() {
    let mut p = PointerState::default();
    p.press(Vec2::new(100.0, 100.0));
    assert_eq!(p.move_to(Vec2::new(102.0, 101.0), 4.0), None);
    assert!(!p.dragging);
    assert!(p.release());
    assert!(!p.down);
}

#[test]
fn long_move_becomes_drag() {
    let mut p = PointerState::default();
    p.press(Vec2::new(100.0, 100.0));
    assert_eq!(p.move_to(Vec2::new(102.0, 100.0), 4.0), None);
    assert_eq!(
        p.move_to(Vec2::new(110.0, 100.0), 4.0),
        Some(Vec2::new(8.0, 0.0))
    );
    assert!(p.dragging);
    assert_eq!(
        p.move_to(Vec2::new(110.0, 95.0), 4.0),
        Some(Vec2::new(0.0, -5.0))
    );
    assert!(!p.release());
    assert!(!p.dragging);
}

#[test]
fn moves_without_press_never_drag() {
    let mut p = PointerState::default();
    assert_eq!(p.move_to(Vec2::new(500.0, 0.0), 4.0), None);
    assert_eq!(p.x, 500.0);
    assert!(!p.release());
}
