mod free_fly;
mod orbit;

use glam::{Mat4, Vec3};

pub use free_fly::{FreeFlyCamera, MovementDirection, PITCH_LIMIT};
pub use orbit::{OrbitCamera, OrbitView, MIN_DISTANCE};

/// Anything that can place an eye in the world
pub trait ViewBasis {
    fn position(&self) -> Vec3;
    fn target(&self) -> Vec3;
    fn up(&self) -> Vec3;

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target(), self.up())
    }
}

/// The camera a demo is currently looking through
#[derive(Debug, Clone, PartialEq)]
pub enum Camera {
    Orbit(OrbitCamera),
    FreeFly(FreeFlyCamera),
}

impl Camera {
    fn basis(&self) -> &dyn ViewBasis {
        match self {
            Camera::Orbit(camera) => camera,
            Camera::FreeFly(camera) => camera,
        }
    }
}

impl ViewBasis for Camera {
    fn position(&self) -> Vec3 {
        self.basis().position()
    }

    fn target(&self) -> Vec3 {
        self.basis().target()
    }

    fn up(&self) -> Vec3 {
        self.basis().up()
    }
}

impl From<OrbitCamera> for Camera {
    fn from(camera: OrbitCamera) -> Self {
        Camera::Orbit(camera)
    }
}

impl From<FreeFlyCamera> for Camera {
    fn from(camera: FreeFlyCamera) -> Self {
        Camera::FreeFly(camera)
    }
}

/// Perspective parameters shared by every demo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(fov_y: f32, near: f32, far: f32) -> Self {
        Self { fov_y, near, far }
    }

    pub fn matrix(&self, aspect: f32) -> Mat4 {
        // A minimized window reports zero height
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(std::f32::consts::FRAC_PI_4, 0.1, 100.0)
    }
}
