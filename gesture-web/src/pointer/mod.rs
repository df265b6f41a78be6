//! Pointer module - gesture gate and motion filter
//!
//! Re-exports only. All logic in submodules.

mod types;
mod hand;
mod motion;

pub use types::{NormalizedPoint, ScreenPoint, Velocity, Viewport};
pub use hand::{
    ArmSample, ArmSelector, Gesture, Hand, PoseFrame,
    LEFT_SHOULDER, LEFT_WRIST, POSE_LANDMARK_COUNT, RIGHT_SHOULDER, RIGHT_WRIST,
};
pub use motion::{
    MotionFilter, MotionOutcome, ReleasePolicy, Sensitivity,
    DEFAULT_SENSITIVITY, MAX_SENSITIVITY, MIN_SENSITIVITY,
};
