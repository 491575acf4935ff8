// Host-side tests for scene composition, picking and per-frame updates.

use glam::Vec3;
use portfolio_core::mesh::Shape;
use portfolio_core::{
    star_twinkle, Clock, CursorStyle, FrameTime, Ray, Scene, BLINK_HIGH, BLINK_LOW,
    LABEL_FONT_SIZE, LAYOUT, SHAPE_COUNT,
};

const EPS: f32 = 1e-4;
const SATURN: usize = 4;

fn scene() -> Scene {
    Scene::new(42)
}

fn ray_towards(scene: &Scene, index: usize) -> Ray {
    let (center, _) = scene.objects()[index].pick_sphere(scene.elapsed());
    let origin = scene.orbit().eye();
    Ray {
        origin,
        dir: (center - origin).normalize(),
    }
}

#[test]
fn layout_builds_every_object() {
    let s = scene();
    assert_eq!(s.objects().len(), LAYOUT.len());
    let labels: Vec<&str> = s.objects().iter().map(|o| o.controller.label()).collect();
    assert_eq!(
        labels,
        [
            "Explorer", "Explorer", "Server", "Server", "Saturn", "Titan", "Mars", "Neptune",
            "Triton", "Xylos"
        ]
    );
    assert_eq!(s.nebula().count(), 7000);
    assert_eq!(s.stars().len(), 8000);
}

#[test]
fn snapshot_counts_parts_and_shapes() {
    let snap = scene().snapshot();
    // 2 astronauts x4, 2 servers x3, ringed planet x2, five single spheres
    let object_parts = 8 + 6 + 2 + 5;
    assert_eq!(snap.draws.len(), object_parts + SHAPE_COUNT);
    assert_eq!(snap.draws.iter().filter(|d| d.shape == Shape::Ring).count(), 1);
    // only the ring is see-through
    for d in &snap.draws {
        assert_eq!(d.material.is_transparent(), d.shape == Shape::Ring);
    }
    assert_eq!(
        snap.draws
            .iter()
            .filter(|d| d.shape == Shape::Icosahedron)
            .count(),
        SHAPE_COUNT
    );
    assert!(snap.labels.is_empty());
    assert_eq!(snap.nebula_rotation_y, 0.0);
}

#[test]
fn server_indicators_follow_blink() {
    let snap = scene().snapshot();
    // Objects 0 and 1 are astronauts (4 parts each); the first server's lights follow
    assert_eq!(snap.draws[9].material.emissive_intensity, BLINK_LOW);
    assert_eq!(snap.draws[10].material.emissive_intensity, BLINK_HIGH);
}

#[test]
fn click_shows_label_at_anchor() {
    let mut s = scene();
    assert!(s.click(SATURN));
    let snap = s.snapshot();
    assert_eq!(snap.labels.len(), 1);
    let label = &snap.labels[0];
    assert_eq!(label.object, SATURN);
    assert_eq!(label.text, "Saturn");
    assert_eq!(label.font_size, LABEL_FONT_SIZE);
    // size 3: 3 * 1.5 + 0.5 above the base
    assert!((label.anchor - Vec3::new(15.0, 7.0, -15.0)).length() < EPS);

    s.click(SATURN);
    assert!(s.snapshot().labels.is_empty());
}

#[test]
fn click_out_of_range_is_rejected() {
    let mut s = scene();
    assert!(!s.click(LAYOUT.len()));
}

#[test]
fn tick_advances_jump_spin_and_orbit() {
    let mut s = scene();
    let azimuth = s.orbit().azimuth();
    s.click(0);
    s.tick(FrameTime {
        elapsed: 0.1,
        delta: 0.1,
    });
    assert!((s.objects()[0].controller.vertical_offset() - 0.4).abs() < EPS);
    assert_eq!(s.objects()[1].controller.vertical_offset(), 0.0);
    assert!((s.snapshot().nebula_rotation_y - 0.0015).abs() < 1e-6);
    assert!(s.orbit().azimuth() < azimuth);
    assert_eq!(s.snapshot().star_scale, star_twinkle(0.1));
}

#[test]
fn invalid_delta_freezes_integrated_state() {
    let mut s = scene();
    s.click(0);
    let azimuth = s.orbit().azimuth();
    for delta in [-0.5, f32::NAN, f32::INFINITY] {
        s.tick(FrameTime {
            elapsed: 1.0,
            delta,
        });
    }
    assert_eq!(s.objects()[0].controller.vertical_offset(), 0.0);
    assert_eq!(s.orbit().azimuth(), azimuth);
    assert_eq!(s.snapshot().nebula_rotation_y, 0.0);
}

#[test]
fn clock_driven_frames() {
    let mut s = scene();
    let mut clock = Clock::new();
    s.click(SATURN);
    for _ in 0..60 {
        s.tick(clock.advance(1.0 / 60.0));
    }
    assert!((s.elapsed() - 1.0).abs() < EPS);
    // Rose past the apex and came back down within a second
    assert!(s.objects()[SATURN].controller.vertical_offset() < 1.0);
}

#[test]
fn pick_hits_object_on_ray() {
    let s = scene();
    let ray = ray_towards(&s, SATURN);
    assert_eq!(s.pick(&ray), Some(SATURN));
}

#[test]
fn pick_misses_empty_space() {
    let s = scene();
    let ray = Ray {
        origin: s.orbit().eye(),
        dir: Vec3::Z,
    };
    assert_eq!(s.pick(&ray), None);
}

#[test]
fn hover_transitions_report_cursor_changes() {
    let mut s = scene();
    assert_eq!(s.pointer_over(Some(2)), Some(CursorStyle::Pointer));
    assert_eq!(s.hovered(), Some(2));
    assert!(s.objects()[2].controller.state().hovered);

    // Same target again is not a change
    assert_eq!(s.pointer_over(Some(2)), None);

    // Moving straight to another object keeps the pointer cursor
    assert_eq!(s.pointer_over(Some(3)), Some(CursorStyle::Pointer));
    assert!(!s.objects()[2].controller.state().hovered);
    assert!(s.objects()[3].controller.state().hovered);

    assert_eq!(s.pointer_over(None), Some(CursorStyle::Auto));
    assert_eq!(s.hovered(), None);
    assert_eq!(s.pointer_over(None), None);
}

#[test]
fn hover_out_of_range_counts_as_none() {
    let mut s = scene();
    assert_eq!(s.pointer_over(Some(99)), None);
    assert_eq!(s.hovered(), None);
}

#[test]
fn hover_grows_pick_radius() {
    let mut s = scene();
    let (_, rest) = s.objects()[0].pick_sphere(0.0);
    s.pointer_over(Some(0));
    let (_, hovered) = s.objects()[0].pick_sphere(0.0);
    assert!((hovered / rest - 1.15).abs() < EPS);
}

#[test]
fn same_seed_same_scene() {
    let a = Scene::new(5);
    let b = Scene::new(5);
    assert_eq!(a.nebula().positions(), b.nebula().positions());
    let (sa, sb) = (a.snapshot(), b.snapshot());
    for (da, db) in sa.draws.iter().zip(&sb.draws) {
        assert_eq!(da.model, db.model);
    }
}
