use glam::{Mat4, Vec3};

use crate::lighting::LightParams;
use crate::math::normal_matrix;
use crate::scene::{DrawItem, FrameDescription};

/// Per-frame uniform block for the Phong pipeline (group 0)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_position: [f32; 3],
    pub _pad0: f32,
    pub light_color: [f32; 3],
    pub shininess: f32,
    pub light_position: [f32; 3],
    pub _pad1: f32,
    pub ambient: [f32; 3],
    pub _pad2: f32,
    pub diffuse: [f32; 3],
    pub _pad3: f32,
    pub specular: [f32; 3],
    pub _pad4: f32,
}

impl GlobalUniform {
    pub fn new(view: Mat4, projection: Mat4, view_position: Vec3, light: &LightParams) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_position: view_position.to_array(),
            _pad0: 0.0,
            light_color: light.color.to_array(),
            shininess: light.shininess,
            light_position: light.position.to_array(),
            _pad1: 0.0,
            ambient: light.ambient.to_array(),
            _pad2: 0.0,
            diffuse: light.diffuse.to_array(),
            _pad3: 0.0,
            specular: light.specular.to_array(),
            _pad4: 0.0,
        }
    }
}

impl From<&FrameDescription> for GlobalUniform {
    fn from(frame: &FrameDescription) -> Self {
        Self::new(
            frame.view,
            frame.projection,
            frame.camera_position,
            &frame.light,
        )
    }
}

/// Per-draw uniform block (group 1), bound with a dynamic offset
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniform {
    pub model: [[f32; 4]; 4],
    /// mat3x3 columns, each padded to 16 bytes as WGSL lays them out
    pub normal: [[f32; 4]; 3],
    pub unlit: u32,
    pub _pad: [u32; 3],
}

impl DrawUniform {
    pub fn new(model: Mat4, unlit: bool) -> Self {
        let n = normal_matrix(model);
        Self {
            model: model.to_cols_array_2d(),
            normal: [
                n.x_axis.extend(0.0).to_array(),
                n.y_axis.extend(0.0).to_array(),
                n.z_axis.extend(0.0).to_array(),
            ],
            unlit: unlit as u32,
            _pad: [0; 3],
        }
    }
}

impl From<&DrawItem> for DrawUniform {
    fn from(item: &DrawItem) -> Self {
        Self::new(item.model, item.unlit)
    }
}

/// Round `size` up to the next multiple of `alignment` (a power of two)
pub const fn align_to(size: u64, alignment: u64) -> u64 {
    (size + alignment - 1) & !(alignment - 1)
}
