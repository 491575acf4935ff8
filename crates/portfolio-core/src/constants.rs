use glam::Vec3;

// Shared animation/layout tuning constants used by the web frontend.

// Interactive objects
pub const JUMP_RISE_RATE: f32 = 4.0; // offset units per second while rising
pub const JUMP_FALL_RATE: f32 = 3.0; // offset units per second while falling
pub const JUMP_APEX: f32 = 1.0; // rise stops once the offset exceeds this
pub const HOVER_SCALE: f32 = 1.15;
pub const REST_SCALE: f32 = 1.0;

// Labels
pub const LABEL_DEFAULT_OFFSET: f32 = 1.5;
pub const LABEL_SIZE_FACTOR: f32 = 1.5;
pub const LABEL_SIZE_PAD: f32 = 0.5;
pub const LABEL_FONT_SIZE: f32 = 0.4; // world units
pub const LABEL_COLOR: u32 = 0xffffff;

// Nebula point cloud
pub const NEBULA_COUNT: usize = 7000;
pub const NEBULA_EXTENT: f32 = 250.0; // full edge length, centered on the origin
pub const NEBULA_SPIN_RATE: f32 = 0.015; // radians per second about Y
pub const NEBULA_COLOR: u32 = 0x8a2be2;
pub const NEBULA_OPACITY: f32 = 0.7;
pub const NEBULA_POINT_SIZE: f32 = 0.1;

// Background stars
pub const STAR_RADIUS: f32 = 200.0;
pub const STAR_DEPTH: f32 = 50.0;
pub const STAR_COUNT: usize = 8000;
pub const STAR_FACTOR: f32 = 6.0;
pub const STAR_WORLD_SIZE_PER_UNIT: f32 = 0.25; // star size unit -> world units
pub const STAR_TWINKLE_BASE: f32 = 3.0;
pub const STAR_TWINKLE_PHASE: f32 = 100.0; // radians added to elapsed time

// Section reveal
pub const REVEAL_THRESHOLD: f32 = 0.2;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 2.0, 20.0);
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const AUTO_ROTATE_SPEED: f32 = 0.08; // 1.0 == one orbit per minute
pub const ORBIT_POLAR_EPSILON: f32 = 0.01;

// Lighting (colours are sRGB hex, converted with `color::srgb_hex`)
pub const BACKGROUND_COLOR: u32 = 0x010014;
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_LIGHT_POS: Vec3 = Vec3::new(10.0, 10.0, 5.0);
pub const DIRECTIONAL_LIGHT_INTENSITY: f32 = 1.2;
pub const POINT_LIGHT_POS: Vec3 = Vec3::new(-10.0, -10.0, -10.0);
pub const POINT_LIGHT_INTENSITY: f32 = 2.0;
pub const POINT_LIGHT_COLOR: u32 = 0x8338ec;

// Indicator lights on the data server
pub const BLINK_HIGH: f32 = 2.0;
pub const BLINK_LOW: f32 = 0.2;
pub const BLINK_THRESHOLD: f32 = 0.5;

// Floating shapes
pub const SHAPE_COUNT: usize = 50;
pub const SHAPE_SPREAD: f32 = 40.0; // full edge length of the placement cube
pub const SHAPE_RADIUS: f32 = 0.2;
pub const SHAPE_PALETTE: [u32; 5] = [0xffbe0b, 0xfb5607, 0xff006e, 0x8338ec, 0x3a86ff];

// Float wrapper phase range
pub const FLOAT_PHASE_MAX: f32 = 10_000.0;
