pub mod camera;
pub mod color;
pub mod constants;
pub mod data;
pub mod layout;
pub mod render;
pub mod scene;
pub mod transition;

pub static PANEL_WGSL: &str = include_str!("../shaders/panel.wgsl");

pub use camera::*;
pub use color::*;
pub use constants::*;
pub use data::*;
pub use layout::*;
pub use render::*;
pub use scene::*;
pub use transition::*;
