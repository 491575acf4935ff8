use glam::Vec3;
use std::f32::consts::{PI, TAU};

// Shapes are generated at unit size and scaled by their model matrix.

pub const SPHERE_SEGMENTS: u32 = 32;
pub const RING_SEGMENTS: u32 = 64;
// Ring radii relative to the planet radius.
pub const RING_INNER: f32 = 1.4;
pub const RING_OUTER: f32 = 1.8;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    fn push(&mut self, position: Vec3, normal: Vec3) -> u16 {
        let i = self.vertices.len() as u16;
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
        });
        i
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Box,
    Sphere,
    Ring,
    Icosahedron,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Box, Shape::Sphere, Shape::Ring, Shape::Icosahedron];

    pub fn index(&self) -> usize {
        match self {
            Shape::Box => 0,
            Shape::Sphere => 1,
            Shape::Ring => 2,
            Shape::Icosahedron => 3,
        }
    }

    pub fn mesh(&self) -> MeshData {
        match self {
            Shape::Box => unit_box(),
            Shape::Sphere => uv_sphere(SPHERE_SEGMENTS, SPHERE_SEGMENTS),
            Shape::Ring => ring(RING_INNER, RING_OUTER, RING_SEGMENTS),
            Shape::Icosahedron => icosahedron(),
        }
    }
}

/// Axis-aligned cube with edge length 1, centered on the origin.
pub fn unit_box() -> MeshData {
    // (normal, u, v) with u x v == normal so each face winds counter-clockwise
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let c = n * 0.5;
        let (u, v) = (u * 0.5, v * 0.5);
        let a = mesh.push(c - u - v, n);
        let b = mesh.push(c + u - v, n);
        let cc = mesh.push(c + u + v, n);
        let d = mesh.push(c - u + v, n);
        mesh.indices.extend_from_slice(&[a, b, cc, a, cc, d]);
    }
    mesh
}

/// Radius-1 UV sphere.
pub fn uv_sphere(width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    let mut grid = Vec::with_capacity((hs + 1) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let mut row = Vec::with_capacity((ws + 1) as usize);
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let p = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            row.push(mesh.push(p, p.normalize_or_zero()));
        }
        grid.push(row);
    }
    for iy in 0..hs as usize {
        for ix in 0..ws as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs as usize - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Flat annulus in the XY plane facing +Z.
pub fn ring(inner: f32, outer: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut mesh = MeshData::default();
    for radius in [inner, outer] {
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * TAU;
            mesh.push(
                Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0),
                Vec3::Z,
            );
        }
    }
    let stride = (segments + 1) as u16;
    for i in 0..segments as u16 {
        let a = i;
        let b = i + stride;
        let c = i + stride + 1;
        let d = i + 1;
        mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }
    mesh
}

/// Radius-1 icosahedron with flat (per-face) normals.
pub fn icosahedron() -> MeshData {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let corners = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
    .map(Vec3::normalize);
    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    let mut mesh = MeshData::default();
    for [i0, i1, i2] in FACES {
        let (mut a, mut b, c) = (corners[i0], corners[i1], corners[i2]);
        let mut n = (b - a).cross(c - a).normalize();
        if n.dot(a + b + c) < 0.0 {
            std::mem::swap(&mut a, &mut b);
            n = -n;
        }
        let ia = mesh.push(a, n);
        let ib = mesh.push(b, n);
        let ic = mesh.push(c, n);
        mesh.indices.extend_from_slice(&[ia, ib, ic]);
    }
    mesh
}
