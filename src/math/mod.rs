mod aabb;
mod transform;

pub use aabb::AABB;
pub use transform::{chain, normal_matrix, rotation_y_about, try_normal_matrix};
