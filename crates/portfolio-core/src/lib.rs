pub mod camera;
pub mod clock;
pub mod color;
pub mod constants;
pub mod contact;
pub mod content;
pub mod idle;
pub mod interactive;
pub mod mesh;
pub mod particles;
pub mod presets;
pub mod reveal;
pub mod scene;

pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use interactive::*;
pub use particles::*;
pub use reveal::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
