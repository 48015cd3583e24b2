use glam::Vec3;

use super::{MeshData, Vertex};

/// Cube faces in vertex-buffer order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Top,
    Front,
    Left,
    Bottom,
    Back,
    Right,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Front,
        Face::Left,
        Face::Bottom,
        Face::Back,
        Face::Right,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Top => "Top",
            Face::Front => "Front",
            Face::Left => "Left",
            Face::Bottom => "Bottom",
            Face::Back => "Back",
            Face::Right => "Right",
        }
    }

    /// Outward normal plus two in-plane axes with `u × v == normal`
    fn basis(self) -> (Vec3, Vec3, Vec3) {
        match self {
            Face::Top => (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            Face::Front => (Vec3::Z, Vec3::X, Vec3::Y),
            Face::Left => (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            Face::Bottom => (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            Face::Back => (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
            Face::Right => (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        }
    }
}

/// One RGBA colour per face, indexed by [`Face::index`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceColors(pub [[f32; 4]; 6]);

impl FaceColors {
    pub fn uniform(color: [f32; 4]) -> Self {
        Self([color; 6])
    }

    pub fn get(&self, face: Face) -> [f32; 4] {
        self.0[face.index()]
    }

    pub fn set(&mut self, face: Face, color: [f32; 4]) {
        self.0[face.index()] = color;
    }
}

/// Unit cube centred on the origin, 4 vertices per face, CCW from outside
pub fn face_colored_cube(colors: &FaceColors) -> MeshData {
    build_cube(colors, false)
}

/// Cube seen from inside: inward normals, reversed winding
pub fn interior_cube(colors: &FaceColors) -> MeshData {
    build_cube(colors, true)
}

/// Flat box for the catch platform: `2 * half_width` wide, `thickness` tall
pub fn platform_slab(half_width: f32, thickness: f32, color: [f32; 4]) -> MeshData {
    let mut mesh = build_cube(&FaceColors::uniform(color), false);
    let scale = Vec3::new(2.0 * half_width, thickness, 2.0 * half_width);
    for vertex in &mut mesh.vertices {
        vertex.position = (Vec3::from(vertex.position) * scale).to_array();
    }
    mesh
}

fn build_cube(colors: &FaceColors, inward: bool) -> MeshData {
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for face in Face::ALL {
        let (normal, u, v) = face.basis();
        let center = normal * 0.5;
        let (u, v) = (u * 0.5, v * 0.5);
        let color = colors.get(face);
        let shading_normal = if inward { -normal } else { normal };

        let base = vertices.len() as u32;
        for corner in [center - u - v, center + u - v, center + u + v, center - u + v] {
            vertices.push(Vertex::new(corner, shading_normal, color));
        }

        if inward {
            indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
        } else {
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    MeshData { vertices, indices }
}
