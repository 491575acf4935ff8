// Host-side tests for the orbit rig, projection and ray picking.

use glam::Vec3;
use portfolio_core::{OrbitCamera, Ray, CAMERA_EYE};

const EPS: f32 = 1e-3;

#[test]
fn default_orbit_starts_at_eye() {
    let orbit = OrbitCamera::default();
    assert!((orbit.eye() - CAMERA_EYE).length() < EPS);
    assert!((orbit.radius() - 404f32.sqrt()).abs() < EPS);
}

#[test]
fn auto_rotate_keeps_distance_and_height() {
    let mut orbit = OrbitCamera::default();
    orbit.auto_rotate(10.0);
    let eye = orbit.eye();
    assert!((eye.length() - orbit.radius()).abs() < EPS);
    assert!((eye.y - 2.0).abs() < EPS);
    assert!(orbit.azimuth() < 0.0);
}

#[test]
fn full_revolution_at_unit_speed_takes_a_minute() {
    let mut orbit = OrbitCamera::default();
    orbit.auto_rotate_speed = 1.0;
    for _ in 0..600 {
        orbit.auto_rotate(0.1);
    }
    assert!((orbit.eye() - CAMERA_EYE).length() < 0.05);
}

#[test]
fn drag_clamps_polar_angle() {
    let mut orbit = OrbitCamera::default();
    orbit.drag(0.0, 10_000.0, 800.0);
    assert!(orbit.polar() > 0.0);
    assert!(orbit.eye().y > 0.0);
    orbit.drag(0.0, -20_000.0, 800.0);
    assert!(orbit.polar() < std::f32::consts::PI);
    assert!((orbit.eye().length() - orbit.radius()).abs() < EPS);
}

#[test]
fn center_ray_points_at_target() {
    let cam = OrbitCamera::default().camera(16.0 / 9.0);
    let ray = cam.ray_from_ndc(0.0, 0.0);
    let expected = (Vec3::ZERO - cam.eye).normalize();
    assert!((ray.dir - expected).length() < EPS);
    assert_eq!(ray.origin, cam.eye);
}

#[test]
fn project_round_trips_through_ray() {
    let cam = OrbitCamera::default().camera(1.5);
    let world = Vec3::new(3.0, -1.0, -4.0);
    let ndc = cam.project(world).expect("in front of camera");
    assert!(ndc.x.abs() < 1.0 && ndc.y.abs() < 1.0);
    let ray = cam.ray_from_ndc(ndc.x, ndc.y);
    let expected = (world - cam.eye).normalize();
    assert!((ray.dir - expected).length() < EPS);
}

#[test]
fn project_behind_camera_is_none() {
    let cam = OrbitCamera::default().camera(1.0);
    assert!(cam.project(Vec3::new(0.0, 2.0, 40.0)).is_none());
}

#[test]
fn basis_is_orthonormal() {
    let cam = OrbitCamera::default().camera(1.0);
    let (right, up) = cam.basis();
    assert!((right.length() - 1.0).abs() < EPS);
    assert!((up.length() - 1.0).abs() < EPS);
    assert!(right.dot(up).abs() < EPS);
}

#[test]
fn sphere_hit_front_and_miss() {
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::Z,
    };
    let t = ray.sphere_hit(Vec3::new(0.0, 0.0, 5.0), 2.0).expect("hit");
    assert!((t - 3.0).abs() < EPS);
    assert!(ray.sphere_hit(Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
    assert!(ray.sphere_hit(Vec3::new(5.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn sphere_hit_from_inside() {
    let ray = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::X,
    };
    let t = ray.sphere_hit(Vec3::ZERO, 2.0).expect("inside");
    assert!((t - 2.0).abs() < EPS);
}
