use glam::{Mat4, Vec3};
use std::collections::HashSet;
use std::f32::consts::FRAC_PI_2;

use crate::math::rotation_y_about;

pub const DEFAULT_ANGULAR_SPEED: f32 = FRAC_PI_2;
pub const DEFAULT_PIVOT: Vec3 = Vec3::new(0.0, 0.35, 0.0);

/// Sense of a quarter turn seen from below the cube (looking up +Y)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    /// Positive angle about +Y
    Clockwise,
    /// Negative angle about +Y
    CounterClockwise,
}

impl TurnDirection {
    fn signed_quarter(self) -> f32 {
        match self {
            TurnDirection::Clockwise => FRAC_PI_2,
            TurnDirection::CounterClockwise => -FRAC_PI_2,
        }
    }
}

/// Layer rotation state, angles in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnState {
    Idle { angle: f32 },
    Turning { current: f32, target: f32 },
}

impl TurnState {
    pub fn angle(&self) -> f32 {
        match *self {
            TurnState::Idle { angle } => angle,
            TurnState::Turning { current, .. } => current,
        }
    }

    pub fn target(&self) -> f32 {
        match *self {
            TurnState::Idle { angle } => angle,
            TurnState::Turning { target, .. } => target,
        }
    }

    pub fn is_turning(&self) -> bool {
        matches!(self, TurnState::Turning { .. })
    }

    /// Begin a quarter turn. A turn already in progress is left untouched.
    pub fn start(self, direction: TurnDirection) -> Self {
        match self {
            TurnState::Idle { angle } => TurnState::Turning {
                current: angle,
                target: angle + direction.signed_quarter(),
            },
            turning => turning,
        }
    }

    /// Advance by `speed * dt` toward the target without overshooting.
    /// Arrival snaps to the target exactly and returns to `Idle`.
    pub fn step(self, speed: f32, dt: f32) -> Self {
        match self {
            TurnState::Turning { current, target } => {
                let step = (speed * dt).max(0.0);
                let remaining = target - current;
                if remaining.abs() <= step {
                    TurnState::Idle { angle: target }
                } else {
                    TurnState::Turning {
                        current: current + step * remaining.signum(),
                        target,
                    }
                }
            }
            idle => idle,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        TurnState::Idle { angle: 0.0 }
    }
}

/// Rotates a fixed subset of objects about a vertical axis through `pivot`
#[derive(Debug, Clone)]
pub struct FaceTurnAnimator {
    state: TurnState,
    angular_speed: f32,
    pivot: Vec3,
    affected: HashSet<usize>,
}

impl FaceTurnAnimator {
    pub fn new(angular_speed: f32, pivot: Vec3, affected: impl IntoIterator<Item = usize>) -> Self {
        Self {
            state: TurnState::default(),
            angular_speed,
            pivot,
            affected: affected.into_iter().collect(),
        }
    }

    /// Select affected objects once, by position
    pub fn from_layer(
        angular_speed: f32,
        pivot: Vec3,
        positions: &[Vec3],
        in_layer: impl Fn(Vec3) -> bool,
    ) -> Self {
        let affected = positions
            .iter()
            .enumerate()
            .filter(|(_, p)| in_layer(**p))
            .map(|(i, _)| i);
        Self::new(angular_speed, pivot, affected)
    }

    /// Returns `false` when a turn is already running and the request was ignored
    pub fn request_turn(&mut self, direction: TurnDirection) -> bool {
        if self.state.is_turning() {
            log::debug!("face turn ignored, turn in progress");
            return false;
        }
        self.state = self.state.start(direction);
        true
    }

    pub fn update(&mut self, dt: f32) {
        self.state = self.state.step(self.angular_speed, dt);
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn current_angle(&self) -> f32 {
        self.state.angle()
    }

    pub fn target_angle(&self) -> f32 {
        self.state.target()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_turning()
    }

    pub fn is_affected(&self, index: usize) -> bool {
        self.affected.contains(&index)
    }

    pub fn affected_count(&self) -> usize {
        self.affected.len()
    }

    /// Rotation applied after an affected object's own transform
    pub fn layer_transform(&self) -> Mat4 {
        rotation_y_about(self.pivot, self.state.angle())
    }

    pub fn model_matrix(&self, index: usize, base: Mat4) -> Mat4 {
        if self.is_affected(index) {
            self.layer_transform() * base
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_ignores_step() {
        let state = TurnState::Idle { angle: 1.0 };
        assert_eq!(state.step(10.0, 1.0), state);
    }

    #[test]
    fn step_does_not_cross_target() {
        let state = TurnState::Idle { angle: 0.0 }.start(TurnDirection::CounterClockwise);
        let state = state.step(FRAC_PI_2, 0.4);
        assert!(state.is_turning());
        assert!((state.angle() + 0.4 * FRAC_PI_2).abs() < 1e-6);

        let state = state.step(FRAC_PI_2, 5.0);
        assert_eq!(state, TurnState::Idle { angle: -FRAC_PI_2 });
    }

    #[test]
    fn clockwise_turn_lands_on_plus_quarter() {
        let mut animator = FaceTurnAnimator::new(FRAC_PI_2, Vec3::ZERO, [0]);
        assert!(animator.request_turn(TurnDirection::Clockwise));
        for _ in 0..10 {
            animator.update(0.3);
        }
        assert_eq!(animator.current_angle(), FRAC_PI_2);
        assert!(!animator.is_animating());
    }

    #[test]
    fn start_while_turning_keeps_target() {
        let state = TurnState::default().start(TurnDirection::Clockwise);
        let again = state.start(TurnDirection::CounterClockwise);
        assert_eq!(state, again);
    }

    #[test]
    fn unaffected_objects_keep_base_transform() {
        let animator = {
            let mut a = FaceTurnAnimator::new(DEFAULT_ANGULAR_SPEED, DEFAULT_PIVOT, [2]);
            a.request_turn(TurnDirection::Clockwise);
            a.update(0.5);
            a
        };
        let base = Mat4::from_translation(Vec3::new(0.35, 0.35, 0.0));
        assert_eq!(animator.model_matrix(0, base), base);
        assert_ne!(animator.model_matrix(2, base), base);
    }

    #[test]
    fn from_layer_selects_by_predicate() {
        let positions = [
            Vec3::new(0.0, 0.35, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.35, 0.35, -0.35),
        ];
        let animator =
            FaceTurnAnimator::from_layer(1.0, DEFAULT_PIVOT, &positions, |p| p.y > 0.3);
        assert_eq!(animator.affected_count(), 2);
        assert!(animator.is_affected(0));
        assert!(!animator.is_affected(1));
        assert!(animator.is_affected(2));
    }
}
