//! Motion filter - wrist offset to smoothed pointer motion
//!
//! The wrist's offset from the frame center is a target displacement per
//! frame. An exponential moving average on velocity damps landmark jitter,
//! and the integrated position is clamped to the viewport.

use super::hand::Gesture;
use super::types::{NormalizedPoint, ScreenPoint, Velocity, Viewport};

/// Fixed gain applied on top of the user sensitivity
pub const MOTION_SCALE: f32 = 0.1;

/// Share of the previous velocity kept each frame
pub const VELOCITY_RETAIN: f32 = 0.7;

/// Share of the new target delta blended in each frame
pub const DELTA_WEIGHT: f32 = 0.3;

pub const MIN_SENSITIVITY: f32 = 1.0;
pub const MAX_SENSITIVITY: f32 = 10.0;
pub const DEFAULT_SENSITIVITY: f32 = 10.0;

/// User gain, always within [MIN_SENSITIVITY, MAX_SENSITIVITY]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Sensitivity(f32);

impl Sensitivity {
    /// Clamps into range; NaN falls back to the default
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY))
    }

    pub fn get(&self) -> f32 {
        self.0
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self(DEFAULT_SENSITIVITY)
    }
}

impl From<f32> for Sensitivity {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// What happens to velocity when the hand is lowered or lost
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReleasePolicy {
    /// Zero velocity so the next raise starts from rest
    #[default]
    Reset,
    /// Keep the last velocity; the next raise resumes with it
    Retain,
}

/// Result of one motion filter step
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionOutcome {
    /// Hand raised: pointer moved (possibly by zero) to this position
    Moved(ScreenPoint),
    /// No active gesture this frame; pointer stays where it was
    Inactive,
}

impl MotionOutcome {
    pub fn is_active(&self) -> bool {
        matches!(self, MotionOutcome::Moved(_))
    }
}

/// Velocity-smoothing pointer integrator
pub struct MotionFilter {
    velocity: Velocity,
    release: ReleasePolicy,
}

impl MotionFilter {
    pub fn new(release: ReleasePolicy) -> Self {
        Self {
            velocity: Velocity::ZERO,
            release,
        }
    }

    /// Target displacement for one frame
    ///
    /// Horizontal is mirrored (camera faces the user): a wrist left of
    /// center in the image moves the pointer right.
    pub fn target_delta(wrist: NormalizedPoint, viewport: Viewport, sensitivity: Sensitivity) -> Velocity {
        let gain = sensitivity.get() * MOTION_SCALE;
        Velocity {
            x: (0.5 - wrist.x) * viewport.width * gain,
            y: (wrist.y - 0.5) * viewport.height * gain,
        }
    }

    /// Advance one frame
    ///
    /// Only a raised hand moves the pointer. Lowered or untracked frames
    /// apply the release policy and report `Inactive`.
    pub fn update(
        &mut self,
        gesture: Gesture,
        prev: ScreenPoint,
        viewport: Viewport,
        sensitivity: Sensitivity,
    ) -> MotionOutcome {
        let wrist = match gesture {
            Gesture::Raised(wrist) => wrist,
            Gesture::Lowered | Gesture::Untracked => {
                if self.release == ReleasePolicy::Reset {
                    self.velocity = Velocity::ZERO;
                }
                return MotionOutcome::Inactive;
            }
        };

        let delta = Self::target_delta(wrist, viewport, sensitivity);
        self.velocity = Velocity {
            x: self.velocity.x * VELOCITY_RETAIN + delta.x * DELTA_WEIGHT,
            y: self.velocity.y * VELOCITY_RETAIN + delta.y * DELTA_WEIGHT,
        };

        let next = ScreenPoint::new(prev.x + self.velocity.x, prev.y + self.velocity.y);
        MotionOutcome::Moved(viewport.clamp(next))
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_release_policy(&mut self, release: ReleasePolicy) {
        self.release = release;
    }

    /// Clear velocity (explicit session reset)
    pub fn reset(&mut self) {
        self.velocity = Velocity::ZERO;
    }
}

impl Default for MotionFilter {
    fn default() -> Self {
        Self::new(ReleasePolicy::default())
    }
}
