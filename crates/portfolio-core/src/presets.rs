use crate::color::srgb_hex;
use crate::idle::{FloatMotion, IdleMotion, ASTRONAUT_FLOAT, MOON_FLOAT, PLANET_FLOAT, SERVER_FLOAT};
use crate::mesh::{Shape, RING_OUTER};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub opacity: f32,
}

impl Material {
    pub fn standard(hex: u32) -> Self {
        Self {
            color: srgb_hex(hex),
            roughness: 1.0,
            metalness: 0.0,
            emissive: [0.0; 3],
            emissive_intensity: 1.0,
            opacity: 1.0,
        }
    }

    pub fn roughness(mut self, r: f32) -> Self {
        self.roughness = r;
        self
    }

    pub fn metalness(mut self, m: f32) -> Self {
        self.metalness = m;
        self
    }

    pub fn emissive(mut self, hex: u32, intensity: f32) -> Self {
        self.emissive = srgb_hex(hex);
        self.emissive_intensity = intensity;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// One primitive inside a preset, in the preset's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshPart {
    pub shape: Shape,
    pub offset: Vec3,
    /// Euler angles (XYZ order).
    pub rotation: Vec3,
    /// Per-axis scale of the unit mesh.
    pub size: Vec3,
    pub material: Material,
    /// Index into `IdlePose::indicators` driving this part's emissive intensity.
    pub indicator: Option<usize>,
}

impl MeshPart {
    fn new(shape: Shape, size: Vec3, material: Material) -> Self {
        Self {
            shape,
            offset: Vec3::ZERO,
            rotation: Vec3::ZERO,
            size,
            material,
            indicator: None,
        }
    }

    fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.offset = Vec3::new(x, y, z);
        self
    }

    fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    fn indicator(mut self, channel: usize) -> Self {
        self.indicator = Some(channel);
        self
    }
}

const WHITE: u32 = 0xffffff;
const BLACK: u32 = 0x000000;
const PURPLE: u32 = 0x800080;
const SILVER: u32 = 0xc0c0c0;
const NAVY: u32 = 0x1d3557;
const LIME: u32 = 0x00ff00;
const ORANGE: u32 = 0xffa500;
const GRAY: u32 = 0x808080;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Preset {
    Astronaut,
    DataServer,
    Planet {
        size: f32,
        color: u32,
        ring_color: Option<u32>,
    },
    Moon {
        size: f32,
    },
}

impl Preset {
    /// Built-in name for presets that are not named by the layout.
    pub fn default_label(&self) -> &'static str {
        match self {
            Preset::Astronaut => "Explorer",
            Preset::DataServer => "Server",
            Preset::Planet { .. } => "Planet",
            Preset::Moon { .. } => "Moon",
        }
    }

    pub fn size_hint(&self) -> Option<f32> {
        match self {
            Preset::Planet { size, .. } | Preset::Moon { size } => Some(*size),
            Preset::Astronaut | Preset::DataServer => None,
        }
    }

    pub fn idle_motion(&self) -> IdleMotion {
        match self {
            Preset::Astronaut => IdleMotion::AstronautSway,
            Preset::DataServer => IdleMotion::ServerBlink,
            Preset::Planet { .. } | Preset::Moon { .. } => IdleMotion::Still,
        }
    }

    pub fn float_motion(&self) -> FloatMotion {
        match self {
            Preset::Astronaut => ASTRONAUT_FLOAT,
            Preset::DataServer => SERVER_FLOAT,
            Preset::Planet { .. } => PLANET_FLOAT,
            Preset::Moon { .. } => MOON_FLOAT,
        }
    }

    /// Local bounding radius used for pointer picking (before placement scale).
    pub fn pick_radius(&self) -> f32 {
        match self {
            Preset::Astronaut => 1.0,
            Preset::DataServer => 1.2,
            Preset::Planet {
                size,
                ring_color: Some(_),
                ..
            } => size * RING_OUTER,
            Preset::Planet { size, .. } | Preset::Moon { size } => *size,
        }
    }

    pub fn parts(&self) -> Vec<MeshPart> {
        match *self {
            Preset::Astronaut => vec![
                // body
                MeshPart::new(
                    Shape::Box,
                    Vec3::new(0.8, 1.0, 0.6),
                    Material::standard(WHITE).roughness(0.2),
                )
                .at(0.0, -0.5, 0.0),
                // helmet
                MeshPart::new(
                    Shape::Sphere,
                    Vec3::splat(0.5),
                    Material::standard(WHITE).roughness(0.1),
                )
                .at(0.0, 0.3, 0.0),
                // visor
                MeshPart::new(
                    Shape::Sphere,
                    Vec3::splat(0.4),
                    Material::standard(BLACK)
                        .roughness(0.0)
                        .metalness(1.0)
                        .emissive(PURPLE, 0.5),
                )
                .at(0.0, 0.3, 0.3),
                // backpack
                MeshPart::new(
                    Shape::Box,
                    Vec3::new(0.6, 0.7, 0.3),
                    Material::standard(SILVER).roughness(0.3).metalness(0.5),
                )
                .at(0.0, -0.5, -0.4),
            ],
            Preset::DataServer => vec![
                MeshPart::new(
                    Shape::Box,
                    Vec3::new(1.2, 2.0, 0.8),
                    Material::standard(NAVY).metalness(0.9).roughness(0.4),
                ),
                MeshPart::new(
                    Shape::Box,
                    Vec3::new(0.2, 0.1, 0.05),
                    Material::standard(LIME).emissive(LIME, 1.0),
                )
                .at(0.0, 0.8, 0.45)
                .indicator(0),
                MeshPart::new(
                    Shape::Box,
                    Vec3::new(0.2, 0.1, 0.05),
                    Material::standard(ORANGE).emissive(ORANGE, 1.0),
                )
                .at(0.0, 0.6, 0.45)
                .indicator(1),
            ],
            Preset::Planet {
                size,
                color,
                ring_color,
            } => {
                let mut parts = vec![MeshPart::new(
                    Shape::Sphere,
                    Vec3::splat(size),
                    Material::standard(color).roughness(0.6).metalness(0.2),
                )];
                if let Some(ring) = ring_color {
                    parts.push(
                        MeshPart::new(
                            Shape::Ring,
                            Vec3::splat(size),
                            Material::standard(ring).opacity(0.8),
                        )
                        .rotated(Vec3::new(FRAC_PI_2, 0.0, 0.0)),
                    );
                }
                parts
            }
            Preset::Moon { size } => vec![MeshPart::new(
                Shape::Sphere,
                Vec3::splat(size),
                Material::standard(GRAY).roughness(0.8),
            )],
        }
    }
}
