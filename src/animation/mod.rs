mod arrangement;
mod face_turn;

pub use arrangement::ArrangementAnimator;
pub use face_turn::{
    FaceTurnAnimator, TurnDirection, TurnState, DEFAULT_ANGULAR_SPEED, DEFAULT_PIVOT,
};
