use crate::constants::{BLINK_HIGH, BLINK_LOW, BLINK_THRESHOLD, FLOAT_PHASE_MAX};
use glam::Vec3;
use rand::Rng;

/// Low-amplitude bob and tilt wrapped around every preset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    /// Per-instance time offset so neighbours do not move in lockstep.
    pub phase: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatPose {
    pub offset_y: f32,
    /// Euler angles (XYZ order).
    pub rotation: Vec3,
}

impl FloatMotion {
    pub const fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
            phase: 0.0,
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_random_phase<R: Rng>(self, rng: &mut R) -> Self {
        self.with_phase(rng.gen_range(0.0..FLOAT_PHASE_MAX))
    }

    pub fn sample(&self, t: f32) -> FloatPose {
        let u = (t + self.phase) / 4.0 * self.speed;
        FloatPose {
            offset_y: u.sin() / 10.0 * self.float_intensity,
            rotation: Vec3::new(u.cos() / 8.0, u.sin() / 8.0, u.sin() / 20.0)
                * self.rotation_intensity,
        }
    }
}

pub const ASTRONAUT_FLOAT: FloatMotion = FloatMotion::new(1.5, 0.1, 0.8);
pub const SERVER_FLOAT: FloatMotion = FloatMotion::new(0.8, 0.3, 0.6);
pub const PLANET_FLOAT: FloatMotion = FloatMotion::new(0.5, 0.2, 0.5);
pub const MOON_FLOAT: FloatMotion = FloatMotion::new(1.0, 0.5, 0.2);
pub const SHAPE_FLOAT_SPEED: f32 = 0.8;
pub const SHAPE_FLOAT_INTENSITY: f32 = 1.2;

/// Preset-specific motion layered inside the float wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdleMotion {
    AstronautSway,
    ServerBlink,
    Still,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdlePose {
    /// Euler angles (XYZ order) applied to the whole payload.
    pub rotation: Vec3,
    /// Emissive intensities for the server's two indicator lights.
    pub indicators: [f32; 2],
}

impl Default for IdlePose {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            indicators: [BLINK_LOW, BLINK_LOW],
        }
    }
}

impl IdleMotion {
    pub fn sample(&self, t: f32) -> IdlePose {
        match self {
            IdleMotion::AstronautSway => IdlePose {
                rotation: astronaut_sway(t),
                ..IdlePose::default()
            },
            IdleMotion::ServerBlink => IdlePose {
                indicators: server_blink(t),
                ..IdlePose::default()
            },
            IdleMotion::Still => IdlePose::default(),
        }
    }
}

#[inline]
pub fn astronaut_sway(t: f32) -> Vec3 {
    Vec3::new(t.cos() * 0.1, (t / 2.0).sin() * 0.3, 0.0)
}

#[inline]
pub fn server_blink(t: f32) -> [f32; 2] {
    let level = |wave: f32| {
        if wave > BLINK_THRESHOLD {
            BLINK_HIGH
        } else {
            BLINK_LOW
        }
    };
    [level((t * 5.0).sin()), level((t * 3.0).cos())]
}
