pub mod animation;
pub mod carousel;
pub mod constants;
pub mod highlight;
pub mod model;
pub mod scene;
pub mod viewport;

pub use animation::*;
pub use carousel::*;
pub use constants::*;
pub use highlight::*;
pub use model::*;
pub use scene::*;
pub use viewport::*;

// Shader bundled as a string constant so both frontends compile it in
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
