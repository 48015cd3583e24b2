use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::{MeshData, Vertex};

/// Latitude/longitude sphere centred on the origin.
///
/// `rings` and `segments` are clamped to at least 2 and 3.
pub fn uv_sphere(radius: f32, rings: u32, segments: u32, color: [f32; 4]) -> MeshData {
    let rings = rings.max(2);
    let segments = segments.max(3);

    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    for ring in 0..=rings {
        let theta = PI * ring as f32 / rings as f32;
        for segment in 0..=segments {
            let phi = TAU * segment as f32 / segments as f32;
            let normal = Vec3::new(theta.sin() * phi.cos(), theta.cos(), -theta.sin() * phi.sin());
            vertices.push(Vertex::new(normal * radius, normal, color));
        }
    }

    let stride = segments + 1;
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
    for ring in 0..rings {
        for segment in 0..segments {
            let a = ring * stride + segment;
            let b = a + stride;
            // Skip the degenerate triangle at each pole
            if ring != 0 {
                indices.extend_from_slice(&[a, b, a + 1]);
            }
            if ring != rings - 1 {
                indices.extend_from_slice(&[a + 1, b, b + 1]);
            }
        }
    }

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_lie_on_the_sphere() {
        let mesh = uv_sphere(2.5, 8, 12, [1.0, 0.0, 0.0, 1.0]);
        for v in &mesh.vertices {
            assert!((Vec3::from(v.position).length() - 2.5).abs() < 1e-5);
        }
    }

    #[test]
    fn triangles_face_outward() {
        let mesh = uv_sphere(1.0, 6, 8, [1.0; 4]);
        assert!(mesh.triangle_count() > 0);
        for tri in mesh.indices.chunks_exact(3) {
            let p = |i: usize| Vec3::from(mesh.vertices[tri[i] as usize].position);
            let normal = (p(1) - p(0)).cross(p(2) - p(0));
            let centroid = (p(0) + p(1) + p(2)) / 3.0;
            assert!(normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn tiny_tessellation_is_clamped() {
        let mesh = uv_sphere(1.0, 0, 0, [1.0; 4]);
        assert_eq!(mesh.vertices.len(), 3 * 4);
        assert_eq!(mesh.triangle_count(), 2 * 3);
    }
}
