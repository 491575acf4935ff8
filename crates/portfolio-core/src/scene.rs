use crate::camera::{OrbitCamera, Ray};
use crate::clock::{sanitize_delta, FrameTime};
use crate::color::srgb_hex;
use crate::constants::*;
use crate::idle::{FloatMotion, IdleMotion, SHAPE_FLOAT_INTENSITY, SHAPE_FLOAT_SPEED};
use crate::interactive::{CursorStyle, InteractiveObject, ObjectPlacement};
use crate::mesh::Shape;
use crate::particles::{star_twinkle, FieldSpin, ParticleField, StarField};
use crate::presets::{Material, MeshPart, Preset};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;

// Fixed scene layout and per-frame composition.

/// One entry of the fixed layout.
#[derive(Clone, Copy, Debug)]
pub struct ObjectSpec {
    pub preset: Preset,
    pub label: Option<&'static str>,
    pub position: [f32; 3],
    pub scale: f32,
}

const fn spec(preset: Preset, label: Option<&'static str>, position: [f32; 3], scale: f32) -> ObjectSpec {
    ObjectSpec {
        preset,
        label,
        position,
        scale,
    }
}

pub const LAYOUT: [ObjectSpec; 10] = [
    spec(Preset::Astronaut, None, [-8.0, -2.0, -10.0], 1.5),
    spec(Preset::Astronaut, None, [7.0, 3.0, -8.0], 1.2),
    spec(Preset::DataServer, None, [-6.0, 2.0, -5.0], 1.0),
    spec(Preset::DataServer, None, [5.0, -3.0, -4.0], 1.0),
    spec(
        Preset::Planet {
            size: 3.0,
            color: 0xe0aa6e,
            ring_color: Some(0xd4a373),
        },
        Some("Saturn"),
        [15.0, 2.0, -15.0],
        1.0,
    ),
    spec(Preset::Moon { size: 0.6 }, Some("Titan"), [19.0, 3.0, -14.0], 1.0),
    spec(
        Preset::Planet {
            size: 1.8,
            color: 0xc1440e,
            ring_color: None,
        },
        Some("Mars"),
        [-15.0, -5.0, -20.0],
        1.0,
    ),
    spec(
        Preset::Planet {
            size: 2.5,
            color: 0x3a86ff,
            ring_color: None,
        },
        Some("Neptune"),
        [0.0, 8.0, -25.0],
        1.0,
    ),
    spec(Preset::Moon { size: 0.4 }, Some("Triton"), [2.0, 9.0, -26.0], 1.0),
    spec(
        Preset::Planet {
            size: 2.0,
            color: 0xff006e,
            ring_color: None,
        },
        Some("Xylos"),
        [-12.0, 10.0, -30.0],
        1.0,
    ),
];

pub struct SceneObject {
    pub controller: InteractiveObject,
    pub preset: Preset,
    parts: Vec<MeshPart>,
    float: FloatMotion,
    idle: IdleMotion,
}

impl SceneObject {
    pub fn new(spec: &ObjectSpec, float_phase: f32) -> Self {
        let label = spec.label.unwrap_or_else(|| spec.preset.default_label());
        let mut placement =
            ObjectPlacement::new(label, Vec3::from(spec.position)).with_scale(spec.scale);
        if let Some(size) = spec.preset.size_hint() {
            placement = placement.with_size(size);
        }
        Self {
            controller: InteractiveObject::new(placement),
            preset: spec.preset,
            parts: spec.preset.parts(),
            float: spec.preset.float_motion().with_phase(float_phase),
            idle: spec.preset.idle_motion(),
        }
    }

    /// Transform down to (but excluding) the preset's idle rotation.
    fn carrier_matrix(&self, t: f32) -> Mat4 {
        let placement = self.controller.placement();
        let pose = self.float.sample(t);
        Mat4::from_translation(placement.base_position)
            * Mat4::from_scale(Vec3::splat(placement.scale))
            * Mat4::from_translation(Vec3::Y * self.controller.vertical_offset())
            * Mat4::from_scale(Vec3::splat(self.controller.scale_factor()))
            * Mat4::from_translation(Vec3::Y * pose.offset_y)
            * euler(pose.rotation)
    }

    pub fn pick_sphere(&self, t: f32) -> (Vec3, f32) {
        let center = self.carrier_matrix(t).transform_point3(Vec3::ZERO);
        let radius = self.preset.pick_radius()
            * self.controller.placement().scale
            * self.controller.scale_factor();
        (center, radius)
    }

    fn push_draws(&self, t: f32, out: &mut Vec<DrawItem>) {
        let pose = self.idle.sample(t);
        let root = self.carrier_matrix(t) * euler(pose.rotation);
        for part in &self.parts {
            let mut material = part.material;
            if let Some(ch) = part.indicator {
                material.emissive_intensity = pose.indicators[ch];
            }
            out.push(DrawItem {
                shape: part.shape,
                model: root * part_matrix(part),
                material,
            });
        }
    }
}

struct FloatingShape {
    position: Vec3,
    color: u32,
    float: FloatMotion,
}

#[derive(Clone, Debug)]
pub struct DrawItem {
    pub shape: Shape,
    pub model: Mat4,
    pub material: Material,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelItem {
    pub object: usize,
    pub text: String,
    pub anchor: Vec3,
    pub font_size: f32,
    pub color: u32,
}

#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    pub draws: Vec<DrawItem>,
    pub labels: Vec<LabelItem>,
    pub nebula_rotation_y: f32,
    pub star_scale: f32,
}

/// Static light rig, linear colours.
#[derive(Clone, Copy, Debug)]
pub struct Lighting {
    pub background: [f32; 3],
    pub ambient: f32,
    pub directional_pos: Vec3,
    pub directional_intensity: f32,
    pub point_pos: Vec3,
    pub point_intensity: f32,
    pub point_color: [f32; 3],
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            background: srgb_hex(BACKGROUND_COLOR),
            ambient: AMBIENT_INTENSITY,
            directional_pos: DIRECTIONAL_LIGHT_POS,
            directional_intensity: DIRECTIONAL_LIGHT_INTENSITY,
            point_pos: POINT_LIGHT_POS,
            point_intensity: POINT_LIGHT_INTENSITY,
            point_color: srgb_hex(POINT_LIGHT_COLOR),
        }
    }
}

pub struct Scene {
    objects: Vec<SceneObject>,
    shapes: Vec<FloatingShape>,
    nebula: ParticleField,
    stars: StarField,
    spin: FieldSpin,
    orbit: OrbitCamera,
    lighting: Lighting,
    hovered: Option<usize>,
    elapsed: f32,
}

impl Scene {
    pub fn new(seed: u64) -> Self {
        Self::with_layout(&LAYOUT, seed)
    }

    pub fn with_layout(layout: &[ObjectSpec], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let objects = layout
            .iter()
            .map(|s| SceneObject::new(s, rng.gen_range(0.0..FLOAT_PHASE_MAX)))
            .collect::<Vec<_>>();
        let shapes = (0..SHAPE_COUNT)
            .map(|i| FloatingShape {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD,
                    (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD,
                    (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD,
                ),
                color: SHAPE_PALETTE[i % SHAPE_PALETTE.len()],
                float: FloatMotion::new(SHAPE_FLOAT_SPEED, rng.gen(), SHAPE_FLOAT_INTENSITY)
                    .with_random_phase(&mut rng),
            })
            .collect();
        let nebula = ParticleField::generate(NEBULA_COUNT, &mut rng);
        let stars = StarField::generate(STAR_RADIUS, STAR_DEPTH, STAR_COUNT, STAR_FACTOR, &mut rng);
        log::info!(
            "[scene] objects={} shapes={} nebula={} stars={}",
            objects.len(),
            SHAPE_COUNT,
            nebula.count(),
            stars.len()
        );
        Self {
            objects,
            shapes,
            nebula,
            stars,
            spin: FieldSpin::default(),
            orbit: OrbitCamera::default(),
            lighting: Lighting::default(),
            hovered: None,
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self, time: FrameTime) {
        let delta = sanitize_delta(time.delta);
        self.elapsed = time.elapsed;
        for obj in &mut self.objects {
            obj.controller.update(delta);
        }
        self.spin.advance(delta);
        self.orbit.auto_rotate(delta);
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let t = self.elapsed;
        let mut draws = Vec::with_capacity(self.objects.len() * 4 + self.shapes.len());
        for obj in &self.objects {
            obj.push_draws(t, &mut draws);
        }
        for shape in &self.shapes {
            let pose = shape.float.sample(t);
            draws.push(DrawItem {
                shape: Shape::Icosahedron,
                model: Mat4::from_translation(Vec3::Y * pose.offset_y)
                    * euler(pose.rotation)
                    * Mat4::from_translation(shape.position)
                    * Mat4::from_scale(Vec3::splat(SHAPE_RADIUS)),
                material: Material::standard(shape.color)
                    .metalness(0.7)
                    .roughness(0.3),
            });
        }
        let labels = self
            .objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.controller.label_visible())
            .map(|(i, o)| LabelItem {
                object: i,
                text: o.controller.label().to_string(),
                anchor: o.controller.label_anchor(),
                font_size: LABEL_FONT_SIZE * o.controller.placement().scale,
                color: LABEL_COLOR,
            })
            .collect();
        FrameSnapshot {
            draws,
            labels,
            nebula_rotation_y: self.spin.angle(),
            star_scale: star_twinkle(t),
        }
    }

    /// Nearest object hit by `ray`, if any.
    pub fn pick(&self, ray: &Ray) -> Option<usize> {
        let mut best = None::<(usize, f32)>;
        for (i, obj) in self.objects.iter().enumerate() {
            let (center, radius) = obj.pick_sphere(self.elapsed);
            if let Some(t) = ray.sphere_hit(center, radius) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best.map(|(i, _)| i)
    }

    /// Move the single pointer's hover to `target`. Returns the cursor change, if any.
    pub fn pointer_over(&mut self, target: Option<usize>) -> Option<CursorStyle> {
        let target = target.filter(|&i| i < self.objects.len());
        if target == self.hovered {
            return None;
        }
        let mut cursor = None;
        if let Some(old) = self.hovered.take() {
            cursor = self.objects[old].controller.hover_exit().or(cursor);
        }
        if let Some(new) = target {
            cursor = self.objects[new].controller.hover_enter().or(cursor);
            self.hovered = Some(new);
        }
        cursor
    }

    pub fn click(&mut self, index: usize) -> bool {
        match self.objects.get_mut(index) {
            Some(obj) => {
                obj.controller.click();
                log::info!(
                    "[click] {} offset={:.3} label={}",
                    obj.controller.label(),
                    obj.controller.vertical_offset(),
                    obj.controller.label_visible()
                );
                true
            }
            None => false,
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    pub fn nebula(&self) -> &ParticleField {
        &self.nebula
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn orbit(&self) -> &OrbitCamera {
        &self.orbit
    }

    pub fn orbit_mut(&mut self) -> &mut OrbitCamera {
        &mut self.orbit
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

#[inline]
fn euler(rotation: Vec3) -> Mat4 {
    Mat4::from_quat(Quat::from_euler(
        EulerRot::XYZ,
        rotation.x,
        rotation.y,
        rotation.z,
    ))
}

#[inline]
fn part_matrix(part: &MeshPart) -> Mat4 {
    Mat4::from_translation(part.offset) * euler(part.rotation) * Mat4::from_scale(part.size)
}
