//! Render-facing POD types shared by the web and native frontends.

use glam::{Mat4, Vec3};

use crate::constants::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::layout::rotation_matrix;
use crate::transition::PanelState;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PanelInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// World transform for one panel: translate, rotate, then scale the unit
/// quad up to panel size.
pub fn panel_instance(panel: &PanelState, color: [f32; 4]) -> PanelInstance {
    let model = Mat4::from_translation(panel.position)
        * Mat4::from_mat3(rotation_matrix(panel.rotation))
        * Mat4::from_scale(Vec3::new(PANEL_WIDTH, PANEL_HEIGHT, 1.0));
    PanelInstance {
        model: model.to_cols_array_2d(),
        color,
    }
}
