use glam::{Mat3, Mat4, Vec3};

/// Compose transforms applied in the listed order: the first element acts on
/// the object first. `chain(&[a, b])` equals `b * a` for column vectors.
pub fn chain(transforms: &[Mat4]) -> Mat4 {
    transforms
        .iter()
        .fold(Mat4::IDENTITY, |acc, transform| *transform * acc)
}

/// Rotation about the vertical axis passing through `pivot`
pub fn rotation_y_about(pivot: Vec3, angle: f32) -> Mat4 {
    Mat4::from_translation(pivot) * Mat4::from_rotation_y(angle) * Mat4::from_translation(-pivot)
}

/// Transpose-inverse of the upper 3x3 block of `model`.
///
/// Returns `None` when the block is singular (zero scale on some axis).
pub fn try_normal_matrix(model: Mat4) -> Option<Mat3> {
    let linear = Mat3::from_mat4(model);
    let det = linear.determinant();
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    Some(linear.inverse().transpose())
}

/// Transpose-inverse of the upper 3x3 block of `model`, identity when singular
pub fn normal_matrix(model: Mat4) -> Mat3 {
    try_normal_matrix(model).unwrap_or_else(|| {
        log::warn!("singular model matrix, using identity normal matrix");
        Mat3::IDENTITY
    })
}
