// Sanity checks on tuning constants.
#![allow(clippy::assertions_on_constants)]

use portfolio_core::color::{css_hex, hsl_to_linear, srgb_hex};
use portfolio_core::*;

#[test]
fn jump_rates_and_apex() {
    assert_eq!(JUMP_RISE_RATE, 4.0);
    assert_eq!(JUMP_FALL_RATE, 3.0);
    assert_eq!(JUMP_APEX, 1.0);
    assert!(HOVER_SCALE > REST_SCALE);
}

#[test]
fn nebula_and_reveal() {
    assert_eq!(NEBULA_COUNT, 7000);
    assert_eq!(NEBULA_EXTENT, 250.0);
    assert_eq!(NEBULA_SPIN_RATE, 0.015);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
}

#[test]
fn camera_frustum_contains_scene() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > STAR_RADIUS + STAR_DEPTH + CAMERA_EYE.length());
    assert!(ORBIT_POLAR_EPSILON > 0.0);
}

#[test]
fn blink_levels() {
    assert!(BLINK_HIGH > BLINK_LOW);
    assert!(BLINK_THRESHOLD > 0.0 && BLINK_THRESHOLD < 1.0);
}

#[test]
fn colour_conversion() {
    assert!(srgb_hex(0xffffff).iter().all(|c| (c - 1.0).abs() < 1e-5));
    assert_eq!(srgb_hex(0x000000), [0.0, 0.0, 0.0]);
    let [r, g, b] = srgb_hex(0x808080);
    assert!((r - 0.2159).abs() < 1e-3 && r == g && g == b);
    assert_eq!(css_hex(LABEL_COLOR), "#ffffff");
    assert_eq!(css_hex(NEBULA_COLOR), "#8a2be2");
}

#[test]
fn hsl_primaries() {
    let red = hsl_to_linear(0.0, 1.0, 0.5);
    assert!((red[0] - 1.0).abs() < 1e-5 && red[1].abs() < 1e-5 && red[2].abs() < 1e-5);
    let grey = hsl_to_linear(0.3, 0.0, 1.0);
    assert!(grey.iter().all(|c| (c - 1.0).abs() < 1e-5));
}
