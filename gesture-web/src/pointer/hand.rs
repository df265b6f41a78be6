//! Tracked-arm selection and the raised-hand gesture gate
//!
//! A pose frame carries every MediaPipe Pose landmark (33 total); the
//! pointer only needs one wrist/shoulder pair. Which pair is chosen is an
//! `ArmSelector` so callers are not tied to hard-coded indices.

use super::types::NormalizedPoint;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const POSE_LANDMARK_COUNT: usize = 33;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One frame of pose landmarks; `None` marks an untracked point
#[derive(Clone, Copy, Debug)]
pub struct PoseFrame {
    pub landmarks: [Option<NormalizedPoint>; POSE_LANDMARK_COUNT],
}

impl PoseFrame {
    /// A frame where nothing was detected
    pub fn empty() -> Self {
        Self {
            landmarks: [None; POSE_LANDMARK_COUNT],
        }
    }

    pub fn get(&self, index: usize) -> Option<NormalizedPoint> {
        self.landmarks.get(index).copied().flatten()
    }

    pub fn set(&mut self, index: usize, point: Option<NormalizedPoint>) {
        if let Some(slot) = self.landmarks.get_mut(index) {
            *slot = point;
        }
    }
}

impl Default for PoseFrame {
    fn default() -> Self {
        Self::empty()
    }
}

/// Wrist and shoulder of the arm driving the pointer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArmSample {
    pub wrist: Option<NormalizedPoint>,
    pub shoulder: Option<NormalizedPoint>,
}

/// Outcome of the gesture gate for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Wrist above shoulder: the wrist position drives the pointer
    Raised(NormalizedPoint),
    /// Both landmarks tracked, hand at or below the shoulder
    Lowered,
    /// Wrist or shoulder missing from this frame
    Untracked,
}

impl Gesture {
    pub fn is_active(&self) -> bool {
        matches!(self, Gesture::Raised(_))
    }
}

impl ArmSample {
    pub fn new(wrist: Option<NormalizedPoint>, shoulder: Option<NormalizedPoint>) -> Self {
        Self { wrist, shoulder }
    }

    /// Smaller y is higher in image space, so raised means wrist.y < shoulder.y
    pub fn gesture(&self) -> Gesture {
        match (self.wrist, self.shoulder) {
            (Some(wrist), Some(shoulder)) if wrist.y < shoulder.y => Gesture::Raised(wrist),
            (Some(_), Some(_)) => Gesture::Lowered,
            _ => Gesture::Untracked,
        }
    }
}

// ============================================================================
// ARM SELECTION
// ============================================================================

/// Picks the wrist/shoulder pair that drives the pointer from a pose frame
pub trait ArmSelector {
    fn select(&self, pose: &PoseFrame) -> ArmSample;
}

/// Which side of the body the pointer follows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hand {
    #[default]
    Left,
    Right,
}

impl Hand {
    pub fn name(&self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }

    /// (wrist, shoulder) landmark indices
    pub fn indices(&self) -> (usize, usize) {
        match self {
            Hand::Left => (LEFT_WRIST, LEFT_SHOULDER),
            Hand::Right => (RIGHT_WRIST, RIGHT_SHOULDER),
        }
    }
}

impl ArmSelector for Hand {
    fn select(&self, pose: &PoseFrame) -> ArmSample {
        let (wrist, shoulder) = self.indices();
        ArmSample::new(pose.get(wrist), pose.get(shoulder))
    }
}
