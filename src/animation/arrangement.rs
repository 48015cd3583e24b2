use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_4;

use crate::math::chain;

/// Pulsing centre cube with a small "diamond" cube orbiting it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrangementAnimator {
    enabled: bool,
    time: f32,
}

impl ArrangementAnimator {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, time: 0.0 }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        log::debug!("arrangement animation enabled: {}", self.enabled);
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn advance(&mut self, dt: f32) {
        if self.enabled {
            self.time += dt;
        }
    }

    pub fn center_scale(&self) -> f32 {
        1.0 + 0.2 * (1.5 * self.time).sin()
    }

    pub fn local_angle(&self) -> f32 {
        10.0 * self.time
    }

    pub fn global_angle(&self) -> f32 {
        self.time
    }

    pub fn center_model(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.center_scale()))
    }

    pub fn diamond_model(&self) -> Mat4 {
        chain(&[
            Mat4::from_scale(Vec3::splat(0.25)),
            Mat4::from_rotation_x(FRAC_PI_4),
            Mat4::from_rotation_z(FRAC_PI_4),
            Mat4::from_rotation_y(self.local_angle()),
            Mat4::from_translation(Vec3::new(1.0, 1.0, 0.0)),
            Mat4::from_rotation_y(self.global_angle()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_animator_does_not_advance() {
        let mut animator = ArrangementAnimator::new(false);
        animator.advance(3.0);
        assert_eq!(animator.time(), 0.0);
        assert_eq!(animator.center_scale(), 1.0);
    }

    #[test]
    fn toggle_resumes_from_paused_time() {
        let mut animator = ArrangementAnimator::new(true);
        animator.advance(1.0);
        animator.toggle();
        animator.advance(1.0);
        animator.toggle();
        animator.advance(0.5);
        assert!((animator.time() - 1.5).abs() < 1e-6);
        assert!((animator.local_angle() - 15.0).abs() < 1e-5);
    }

    #[test]
    fn diamond_orbits_at_fixed_height() {
        let mut animator = ArrangementAnimator::new(true);
        for _ in 0..7 {
            animator.advance(0.37);
            let centre = animator.diamond_model().transform_point3(Vec3::ZERO);
            assert!((centre.y - 1.0).abs() < 1e-5);
            assert!((Vec3::new(centre.x, 0.0, centre.z).length() - 1.0).abs() < 1e-5);
        }
    }
}
