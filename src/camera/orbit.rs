use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use super::ViewBasis;

/// Smallest distance the camera may sit from its target.
/// Keeps the look-at basis non-degenerate.
pub const MIN_DISTANCE: f32 = 0.1;

pub const DEFAULT_DISTANCE_STEP: f32 = 0.1;
pub const DEFAULT_ANGLE_STEP: f32 = 5.0 * std::f32::consts::PI / 180.0;

/// Height of the follow-view eye, below the tracked point's ground plane
const FOLLOW_EYE_HEIGHT: f32 = -3.0;
/// How far above the tracked point the follow view looks
const FOLLOW_LOOK_HEIGHT: f32 = 50.0;

/// Which basis the orbit camera currently produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrbitView {
    /// Circling the origin at `distance`
    #[default]
    Orbit,
    /// Looking up from underneath the tracked point
    Follow,
}

/// Camera parameterized by a distance and two angles around the origin.
///
/// `azimuth` is the angle to the ZY plane, `elevation` the angle to the ZX
/// plane, both in radians. Neither angle is clamped: raising the elevation
/// past a pole flips the up vector, which is how the demos behave.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    distance: f32,
    azimuth: f32,
    elevation: f32,
    distance_step: f32,
    angle_step: f32,
    view: OrbitView,
    tracked: Vec3,
}

impl OrbitCamera {
    pub fn new(distance: f32, azimuth: f32, elevation: f32) -> Self {
        Self {
            distance: distance.max(MIN_DISTANCE),
            azimuth,
            elevation,
            distance_step: DEFAULT_DISTANCE_STEP,
            angle_step: DEFAULT_ANGLE_STEP,
            view: OrbitView::Orbit,
            tracked: Vec3::ZERO,
        }
    }

    /// Override the per-command increments
    pub fn with_steps(mut self, distance_step: f32, angle_step: f32) -> Self {
        self.distance_step = distance_step;
        self.angle_step = angle_step;
        self
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.max(MIN_DISTANCE);
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn set_azimuth(&mut self, azimuth: f32) {
        self.azimuth = azimuth;
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn set_elevation(&mut self, elevation: f32) {
        self.elevation = elevation;
    }

    pub fn angle_step(&self) -> f32 {
        self.angle_step
    }

    pub fn increase_distance(&mut self) {
        self.set_distance(self.distance + self.distance_step);
    }

    pub fn decrease_distance(&mut self) {
        self.set_distance(self.distance - self.distance_step);
    }

    pub fn increase_zy_angle(&mut self) {
        self.azimuth += self.angle_step;
    }

    pub fn decrease_zy_angle(&mut self) {
        self.azimuth -= self.angle_step;
    }

    pub fn increase_zx_angle(&mut self) {
        self.elevation += self.angle_step;
    }

    pub fn decrease_zx_angle(&mut self) {
        self.elevation -= self.angle_step;
    }

    pub fn view(&self) -> OrbitView {
        self.view
    }

    /// Switch between orbiting the origin and following the tracked point
    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            OrbitView::Orbit => OrbitView::Follow,
            OrbitView::Follow => OrbitView::Orbit,
        };
    }

    /// Point used by the follow view, updated by the owner every tick
    pub fn track(&mut self, point: Vec3) {
        self.tracked = point;
    }

    fn point_from_angles(distance: f32, azimuth: f32, elevation: f32) -> Vec3 {
        distance
            * Vec3::new(
                elevation.cos() * azimuth.sin(),
                elevation.sin(),
                elevation.cos() * azimuth.cos(),
            )
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(4.0, 0.0, 0.0)
    }
}

impl ViewBasis for OrbitCamera {
    fn position(&self) -> Vec3 {
        match self.view {
            OrbitView::Orbit => {
                Self::point_from_angles(self.distance, self.azimuth, self.elevation)
            }
            OrbitView::Follow => Vec3::new(self.tracked.x, FOLLOW_EYE_HEIGHT, self.tracked.z),
        }
    }

    fn target(&self) -> Vec3 {
        match self.view {
            OrbitView::Orbit => Vec3::ZERO,
            OrbitView::Follow => self.tracked + Vec3::Y * FOLLOW_LOOK_HEIGHT,
        }
    }

    fn up(&self) -> Vec3 {
        match self.view {
            OrbitView::Orbit => {
                Self::point_from_angles(1.0, self.azimuth, self.elevation + FRAC_PI_2).normalize()
            }
            OrbitView::Follow => Vec3::Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_never_drops_below_floor() {
        let mut camera = OrbitCamera::new(0.3, 0.0, 0.0);
        for _ in 0..10 {
            camera.decrease_distance();
        }
        assert_eq!(camera.distance(), MIN_DISTANCE);
        assert!(camera.position().length() > 0.0);
    }

    #[test]
    fn distance_steps_are_additive() {
        let mut camera = OrbitCamera::new(4.0, 0.0, 0.0).with_steps(0.5, 0.1);
        camera.increase_distance();
        camera.increase_distance();
        assert!((camera.distance() - 5.0).abs() < 1e-6);
        camera.decrease_distance();
        assert!((camera.distance() - 4.5).abs() < 1e-6);
    }

    #[test]
    fn angle_commands_are_symmetric() {
        let mut camera = OrbitCamera::default();
        camera.increase_zy_angle();
        camera.increase_zx_angle();
        camera.decrease_zy_angle();
        camera.decrease_zx_angle();
        assert!(camera.azimuth().abs() < 1e-6);
        assert!(camera.elevation().abs() < 1e-6);
    }

    #[test]
    fn up_is_perpendicular_to_view_direction() {
        let camera = OrbitCamera::new(7.0, 0.4, -1.1);
        let forward = (camera.target() - camera.position()).normalize();
        assert!(forward.dot(camera.up()).abs() < 1e-5);
    }

    #[test]
    fn follow_view_tracks_point() {
        let mut camera = OrbitCamera::new(30.0, 0.0, FRAC_PI_2);
        camera.toggle_view();
        camera.track(Vec3::new(4.0, 0.0, -2.0));

        assert_eq!(camera.view(), OrbitView::Follow);
        assert_eq!(camera.position(), Vec3::new(4.0, -3.0, -2.0));
        assert_eq!(camera.target(), Vec3::new(4.0, 50.0, -2.0));
        assert_eq!(camera.up(), Vec3::Z);

        camera.toggle_view();
        assert_eq!(camera.view(), OrbitView::Orbit);
        assert_eq!(camera.target(), Vec3::ZERO);
    }
}
