use glam::{Mat4, Vec3};

use crate::camera::{Camera, Projection, ViewBasis};
use crate::lighting::LightParams;

/// Index into the mesh list a demo hands to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub usize);

/// A mesh placed in the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderableObject {
    pub mesh: MeshId,
    pub transform: Mat4,
}

impl RenderableObject {
    pub fn new(mesh: MeshId, transform: Mat4) -> Self {
        Self { mesh, transform }
    }
}

/// One draw call for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshId,
    pub model: Mat4,
    /// Skip lighting and output the vertex colour
    pub unlit: bool,
}

impl DrawItem {
    pub fn lit(mesh: MeshId, model: Mat4) -> Self {
        Self {
            mesh,
            model,
            unlit: false,
        }
    }

    pub fn unlit(mesh: MeshId, model: Mat4) -> Self {
        Self {
            mesh,
            model,
            unlit: true,
        }
    }
}

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameDescription {
    pub view: Mat4,
    pub projection: Mat4,
    pub camera_position: Vec3,
    pub light: LightParams,
    pub clear_color: [f32; 4],
    pub draws: Vec<DrawItem>,
}

impl FrameDescription {
    pub fn new(camera: &Camera, projection: &Projection, aspect: f32, light: LightParams) -> Self {
        Self {
            view: camera.view_matrix(),
            projection: projection.matrix(aspect),
            camera_position: camera.position(),
            light,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            draws: Vec::new(),
        }
    }

    pub fn with_clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = color;
        self
    }

    pub fn push(&mut self, item: DrawItem) {
        self.draws.push(item);
    }
}
