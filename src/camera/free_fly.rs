use glam::Vec3;

use super::ViewBasis;

/// Pitch limit in degrees. Looking straight up or down would make the front
/// vector parallel to world up and flip the right vector.
pub const PITCH_LIMIT: f32 = 89.0;

pub const DEFAULT_MOVEMENT_SPEED: f32 = 0.1;
pub const DEFAULT_ROTATION_SPEED: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// First-person camera: a position plus yaw/pitch in degrees
#[derive(Debug, Clone, PartialEq)]
pub struct FreeFlyCamera {
    pub position: Vec3,
    /// Degrees, unbounded; -90 looks down negative Z
    pub yaw: f32,
    pitch: f32,
    /// World units per second of `process_movement` delta
    pub movement_speed: f32,
    /// Degrees per rotation command
    pub rotation_speed: f32,
    world_up: Vec3,
}

impl FreeFlyCamera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            world_up: Vec3::Y,
        }
    }

    pub fn with_speeds(mut self, movement_speed: f32, rotation_speed: f32) -> Self {
        self.movement_speed = movement_speed;
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set pitch in degrees, clamped to ±[`PITCH_LIMIT`]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Add `delta_yaw`/`delta_pitch` degrees
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.set_pitch(self.pitch + delta_pitch);
    }

    pub fn yaw_left(&mut self) {
        self.rotate(-self.rotation_speed, 0.0);
    }

    pub fn yaw_right(&mut self) {
        self.rotate(self.rotation_speed, 0.0);
    }

    pub fn pitch_up(&mut self) {
        self.rotate(0.0, self.rotation_speed);
    }

    pub fn pitch_down(&mut self) {
        self.rotate(0.0, -self.rotation_speed);
    }

    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.front().cross(self.world_up).normalize()
    }

    pub fn process_movement(&mut self, direction: MovementDirection, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let offset = match direction {
            MovementDirection::Forward => self.front(),
            MovementDirection::Backward => -self.front(),
            MovementDirection::Left => -self.right(),
            MovementDirection::Right => self.right(),
            MovementDirection::Up => self.world_up,
            MovementDirection::Down => -self.world_up,
        };
        self.position += offset * velocity;
    }
}

impl Default for FreeFlyCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.0, 3.0), -90.0, 0.0)
    }
}

impl ViewBasis for FreeFlyCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn target(&self) -> Vec3 {
        self.position + self.front()
    }

    fn up(&self) -> Vec3 {
        self.world_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn default_looks_down_negative_z() {
        let camera = FreeFlyCamera::default();
        assert_vec3_near(camera.front(), Vec3::new(0.0, 0.0, -1.0));
        assert_vec3_near(camera.right(), Vec3::X);
    }

    #[test]
    fn pitch_is_clamped_on_construction_and_rotation() {
        let mut camera = FreeFlyCamera::new(Vec3::ZERO, 0.0, 120.0);
        assert_eq!(camera.pitch(), PITCH_LIMIT);

        camera.rotate(0.0, -500.0);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn pitch_commands_stop_at_limit() {
        let mut camera = FreeFlyCamera::default();
        for _ in 0..40 {
            camera.pitch_up();
        }
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        assert!(camera.right().is_finite());
    }

    #[test]
    fn up_and_down_use_world_up() {
        let mut camera = FreeFlyCamera::new(Vec3::ZERO, 30.0, 45.0).with_speeds(2.0, 5.0);
        camera.process_movement(MovementDirection::Up, 0.5);
        assert_vec3_near(camera.position, Vec3::Y);
        camera.process_movement(MovementDirection::Down, 1.0);
        assert_vec3_near(camera.position, -Vec3::Y);
    }

    #[test]
    fn yaw_commands_use_rotation_speed() {
        let mut camera = FreeFlyCamera::default();
        camera.yaw_right();
        camera.yaw_right();
        camera.yaw_left();
        assert_eq!(camera.yaw, -90.0 + DEFAULT_ROTATION_SPEED);
    }
}
