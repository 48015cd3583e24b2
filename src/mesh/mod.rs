mod cube;
mod obj;
mod sphere;

use glam::Vec3;

use crate::math::AABB;

pub use cube::{face_colored_cube, interior_cube, platform_slab, Face, FaceColors};
pub use obj::{load_obj_file, parse_obj, ObjError};
pub use sphere::uv_sphere;

/// Vertex layout consumed by the Phong pipeline
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color,
        }
    }
}

/// CPU-side triangle list
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn bounds(&self) -> Option<AABB> {
        AABB::from_points(self.vertices.iter().map(|v| Vec3::from(v.position)))
    }

    /// Recentre on the origin and scale uniformly so the largest extent is
    /// `2 * radius`. Normals are unchanged by a uniform scale.
    pub fn fitted(mut self, radius: f32) -> Self {
        let Some(bounds) = self.bounds() else {
            return self;
        };
        let center = bounds.center();
        let extent = bounds.size().max_element();
        let scale = if extent > 0.0 { 2.0 * radius / extent } else { 1.0 };
        for vertex in &mut self.vertices {
            vertex.position = ((Vec3::from(vertex.position) - center) * scale).to_array();
        }
        self
    }

    /// Overwrite every vertex colour
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        for vertex in &mut self.vertices {
            vertex.color = color;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitted_mesh_is_centred_and_sized() {
        let mesh = MeshData {
            vertices: vec![
                Vertex::new(Vec3::new(10.0, 0.0, 0.0), Vec3::Y, [1.0; 4]),
                Vertex::new(Vec3::new(30.0, 5.0, 2.0), Vec3::Y, [1.0; 4]),
            ],
            indices: vec![],
        }
        .fitted(0.5);

        let bounds = mesh.bounds().unwrap();
        assert!(bounds.center().abs_diff_eq(Vec3::ZERO, 1e-6));
        assert!((bounds.size().max_element() - 1.0).abs() < 1e-6);
        assert_eq!(mesh.vertices[0].normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn fitting_a_point_only_recentres() {
        let mesh = MeshData {
            vertices: vec![Vertex::new(Vec3::splat(3.0), Vec3::Y, [1.0; 4])],
            indices: vec![],
        }
        .fitted(2.0);
        assert_eq!(mesh.vertices[0].position, [0.0; 3]);
    }
}
