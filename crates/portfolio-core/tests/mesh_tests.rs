// Host-side tests for the primitive mesh generators.

use glam::Vec3;
use portfolio_core::mesh::{icosahedron, ring, unit_box, uv_sphere, Shape};

#[test]
fn every_shape_has_valid_indices_and_normals() {
    for shape in Shape::ALL {
        let mesh = shape.mesh();
        assert!(!mesh.vertices.is_empty(), "{:?}", shape);
        assert_eq!(mesh.indices.len() % 3, 0, "{:?}", shape);
        let n = mesh.vertices.len();
        assert!(mesh.indices.iter().all(|&i| (i as usize) < n), "{:?}", shape);
        for v in &mesh.vertices {
            let len = Vec3::from(v.normal).length();
            assert!((len - 1.0).abs() < 1e-3, "{:?} normal {}", shape, len);
        }
    }
}

#[test]
fn shape_indices_are_distinct() {
    let mut seen = Shape::ALL.map(|s| s.index());
    seen.sort_unstable();
    assert_eq!(seen, [0, 1, 2, 3]);
}

#[test]
fn box_has_six_quads() {
    let m = unit_box();
    assert_eq!(m.vertices.len(), 24);
    assert_eq!(m.indices.len(), 36);
    for v in &m.vertices {
        assert!(v.position.iter().all(|c| (c.abs() - 0.5).abs() < 1e-6));
    }
}

#[test]
fn sphere_vertices_are_on_unit_sphere() {
    let m = uv_sphere(8, 6);
    assert_eq!(m.vertices.len(), 9 * 7);
    for v in &m.vertices {
        assert!((Vec3::from(v.position).length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn ring_stays_between_radii() {
    let m = ring(1.4, 1.8, 16);
    for v in &m.vertices {
        let p = Vec3::from(v.position);
        assert_eq!(p.z, 0.0);
        let r = p.length();
        assert!((1.4 - 1e-4..=1.8 + 1e-4).contains(&r));
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    }
}

#[test]
fn icosahedron_faces_point_outward() {
    let m = icosahedron();
    assert_eq!(m.indices.len(), 60);
    for tri in m.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(m.vertices[i as usize].position));
        let centroid = (a + b + c) / 3.0;
        let n = Vec3::from(m.vertices[tri[0] as usize].normal);
        assert!(n.dot(centroid) > 0.0);
        // counter-clockwise seen from outside
        assert!((b - a).cross(c - a).dot(n) > 0.0);
    }
}
