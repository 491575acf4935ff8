use crate::color::hsl_to_linear;
use crate::constants::{NEBULA_EXTENT, NEBULA_SPIN_RATE, STAR_TWINKLE_BASE, STAR_TWINKLE_PHASE};
use rand::Rng;
use std::f32::consts::TAU;

/// Uniform cube of points centered on the origin.
#[derive(Clone, Debug)]
pub struct ParticleField {
    count: usize,
    positions: Vec<f32>,
}

impl ParticleField {
    /// `count` points, each axis sampled independently from `[-EXTENT/2, EXTENT/2]`.
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let positions = (0..count * 3)
            .map(|_| (rng.gen::<f32>() - 0.5) * NEBULA_EXTENT)
            .collect();
        Self { count, positions }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Flat `[x0, y0, z0, x1, ...]` buffer, length `3 * count`.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
    }
}

/// Rigid spin about Y, integrated from frame deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldSpin {
    angle: f32,
}

impl FieldSpin {
    pub fn advance(&mut self, delta: f32) {
        self.angle += delta * NEBULA_SPIN_RATE;
    }

    /// Accumulated angle in radians. Grows without bound.
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

/// Shared star size multiplier at elapsed time `t`. Swings between 2/3 and 4/3
/// of the base size, all stars in phase.
pub fn star_twinkle(t: f32) -> f32 {
    (STAR_TWINKLE_BASE + (t + STAR_TWINKLE_PHASE).sin()) / STAR_TWINKLE_BASE
}

/// Background stars on a thick spherical shell.
#[derive(Clone, Debug)]
pub struct StarField {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub sizes: Vec<f32>,
}

impl StarField {
    pub fn generate<R: Rng>(radius: f32, depth: f32, count: usize, factor: f32, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        let mut sizes = Vec::with_capacity(count);
        let mut r = radius + depth;
        let increment = if count > 0 { depth / count as f32 } else { 0.0 };
        for i in 0..count {
            r -= increment * rng.gen::<f32>();
            let phi = (1.0 - rng.gen::<f32>() * 2.0).clamp(-1.0, 1.0).acos();
            let theta = rng.gen::<f32>() * TAU;
            let sin_phi = phi.sin();
            positions.push([
                r * sin_phi * theta.sin(),
                r * phi.cos(),
                r * sin_phi * theta.cos(),
            ]);
            colors.push(hsl_to_linear(i as f32 / count as f32, 1.0, 0.9));
            sizes.push((0.5 + 0.5 * rng.gen::<f32>()) * factor);
        }
        Self {
            positions,
            colors,
            sizes,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
