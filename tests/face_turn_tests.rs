use cube_demos::animation::{
    FaceTurnAnimator, TurnDirection, DEFAULT_ANGULAR_SPEED, DEFAULT_PIVOT,
};
use glam::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

/// Offsets of a 3x3x3 block of cubies spaced 0.35 apart
fn cubie_offsets() -> Vec<Vec3> {
    let mut offsets = Vec::new();
    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                offsets.push(Vec3::new(x as f32, y as f32, z as f32) * 0.35);
            }
        }
    }
    offsets
}

fn top_layer_animator() -> FaceTurnAnimator {
    FaceTurnAnimator::from_layer(
        DEFAULT_ANGULAR_SPEED,
        DEFAULT_PIVOT,
        &cubie_offsets(),
        |p| p.y > 0.175,
    )
}

#[cfg(test)]
mod face_turn_tests {
    use super::*;

    #[test]
    fn test_top_layer_selects_nine_cubies() {
        assert_eq!(top_layer_animator().affected_count(), 9);
    }

    #[test]
    fn test_clockwise_turn_lands_on_plus_quarter() {
        let mut animator = top_layer_animator();
        assert!(animator.request_turn(TurnDirection::Clockwise));

        // 0.3s steps never divide a one-second turn evenly
        for _ in 0..10 {
            animator.update(0.3);
        }

        assert!(!animator.is_animating());
        assert_eq!(animator.current_angle(), FRAC_PI_2);
    }

    #[test]
    fn test_second_request_mid_turn_is_ignored() {
        let mut animator = top_layer_animator();
        animator.request_turn(TurnDirection::Clockwise);
        animator.update(0.5);
        let mid = animator.current_angle();

        assert!(!animator.request_turn(TurnDirection::CounterClockwise));
        assert_eq!(animator.target_angle(), FRAC_PI_2);
        assert_eq!(animator.current_angle(), mid);
    }

    #[test]
    fn test_turns_accumulate_after_completion() {
        let mut animator = top_layer_animator();
        for _ in 0..2 {
            animator.request_turn(TurnDirection::Clockwise);
            animator.update(2.0);
        }
        assert!((animator.current_angle() - PI).abs() < 1e-6);

        animator.request_turn(TurnDirection::CounterClockwise);
        animator.update(2.0);
        assert!((animator.current_angle() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_only_affected_cubies_rotate() {
        let mut animator = top_layer_animator();
        animator.request_turn(TurnDirection::Clockwise);
        animator.update(2.0);

        let offsets = cubie_offsets();
        for (i, offset) in offsets.iter().enumerate() {
            let base = Mat4::from_translation(*offset);
            let moved = animator.model_matrix(i, base);
            if offset.y > 0.175 {
                let p = moved.transform_point3(Vec3::ZERO);
                // quarter turn about Y maps (x, z) to (z, -x)
                let expected = Vec3::new(offset.z, offset.y, -offset.x);
                assert!(p.abs_diff_eq(expected, 1e-5), "cubie {i}: {p}");
            } else {
                assert_eq!(moved, base);
            }
        }
    }
}
