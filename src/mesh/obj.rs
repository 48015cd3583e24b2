use anyhow::{Context, Result};
use glam::Vec3;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use super::{MeshData, Vertex};

#[derive(Debug, Error, PartialEq)]
pub enum ObjError {
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: `{keyword}` needs 3 components, found {found}")]
    MissingComponents {
        line: usize,
        keyword: &'static str,
        found: usize,
    },

    #[error("line {line}: face needs at least 3 vertices, found {found}")]
    FaceTooSmall { line: usize, found: usize },

    #[error("line {line}: {kind} index {index} out of range")]
    IndexOutOfRange {
        line: usize,
        kind: &'static str,
        index: i64,
    },
}

/// Corner of a parsed face: resolved 0-based position index, optional normal index
#[derive(Debug, Clone, Copy)]
struct Corner {
    position: usize,
    normal: Option<usize>,
}

/// Parse Wavefront OBJ text (`v`, `vn`, `f` only) into an indexed mesh.
///
/// Faces are fan-triangulated. A triangle missing any normal index gets the
/// flat normal of its plane. Identical position/normal pairs share a vertex.
pub fn parse_obj(source: &str, color: [f32; 4]) -> Result<MeshData, ObjError> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut triangles: Vec<[Corner; 3]> = Vec::new();

    for (line_index, raw) in source.lines().enumerate() {
        let line = line_index + 1;
        let mut tokens = raw.split_whitespace();
        match tokens.next() {
            Some("v") => positions.push(parse_vec3(line, "v", tokens)?),
            Some("vn") => normals.push(parse_vec3(line, "vn", tokens)?),
            Some("f") => {
                let corners = tokens
                    .map(|token| parse_corner(line, token, positions.len(), normals.len()))
                    .collect::<Result<Vec<_>, _>>()?;
                if corners.len() < 3 {
                    return Err(ObjError::FaceTooSmall {
                        line,
                        found: corners.len(),
                    });
                }
                for i in 1..corners.len() - 1 {
                    triangles.push([corners[0], corners[i], corners[i + 1]]);
                }
            }
            // Comments, groups, materials and texture coordinates are ignored
            _ => {}
        }
    }

    let mut mesh = MeshData::default();
    let mut shared: HashMap<[u32; 6], u32> = HashMap::new();

    for corners in &triangles {
        let flat = if corners.iter().any(|c| c.normal.is_none()) {
            let [a, b, c] = corners.map(|c| positions[c.position]);
            Some((b - a).cross(c - a).normalize_or_zero())
        } else {
            None
        };

        for corner in corners {
            let position = positions[corner.position];
            let normal = match (flat, corner.normal) {
                (Some(flat), _) => flat,
                (None, Some(n)) => normals[n],
                (None, None) => Vec3::ZERO,
            };
            let key = vertex_key(position, normal);
            let index = *shared.entry(key).or_insert_with(|| {
                mesh.vertices.push(Vertex::new(position, normal, color));
                (mesh.vertices.len() - 1) as u32
            });
            mesh.indices.push(index);
        }
    }

    log::debug!(
        "parsed OBJ: {} positions, {} normals, {} triangles, {} unique vertices",
        positions.len(),
        normals.len(),
        triangles.len(),
        mesh.vertices.len()
    );
    Ok(mesh)
}

/// Read and parse an OBJ file from disk
pub fn load_obj_file(path: impl AsRef<Path>, color: [f32; 4]) -> Result<MeshData> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read OBJ file: {}", path.display()))?;
    let mesh = parse_obj(&source, color)
        .with_context(|| format!("Failed to parse OBJ file: {}", path.display()))?;
    log::info!(
        "Loaded {} ({} triangles)",
        path.display(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

fn vertex_key(position: Vec3, normal: Vec3) -> [u32; 6] {
    [
        position.x.to_bits(),
        position.y.to_bits(),
        position.z.to_bits(),
        normal.x.to_bits(),
        normal.y.to_bits(),
        normal.z.to_bits(),
    ]
}

fn parse_float(line: usize, token: &str) -> Result<f32, ObjError> {
    token.parse::<f32>().map_err(|_| ObjError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_vec3<'a>(
    line: usize,
    keyword: &'static str,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<Vec3, ObjError> {
    let values = tokens
        .take(3)
        .map(|t| parse_float(line, t))
        .collect::<Result<Vec<_>, _>>()?;
    match values.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(ObjError::MissingComponents {
            line,
            keyword,
            found: values.len(),
        }),
    }
}

/// Resolve a 1-based (or negative, relative) OBJ index against `count` entries
fn resolve_index(
    line: usize,
    kind: &'static str,
    token: &str,
    count: usize,
) -> Result<usize, ObjError> {
    let index = token.parse::<i64>().map_err(|_| ObjError::InvalidNumber {
        line,
        token: token.to_string(),
    })?;
    let resolved = match index {
        i if i > 0 => i - 1,
        i if i < 0 => count as i64 + i,
        _ => -1,
    };
    if resolved < 0 || resolved >= count as i64 {
        return Err(ObjError::IndexOutOfRange { line, kind, index });
    }
    Ok(resolved as usize)
}

/// `v`, `v/vt`, `v//vn` or `v/vt/vn`
fn parse_corner(
    line: usize,
    token: &str,
    position_count: usize,
    normal_count: usize,
) -> Result<Corner, ObjError> {
    let mut parts = token.split('/');
    let position = resolve_index(line, "vertex", parts.next().unwrap_or(""), position_count)?;
    let _texcoord = parts.next();
    let normal = match parts.next() {
        Some(n) if !n.is_empty() => Some(resolve_index(line, "normal", n, normal_count)?),
        _ => None,
    };
    Ok(Corner { position, normal })
}
