//! Pose landmark parsing
//!
//! JavaScript hands over MediaPipe Pose results as a flat Float32Array.

use super::error::BridgeError;
use crate::pointer::{NormalizedPoint, PoseFrame, POSE_LANDMARK_COUNT};

/// Floats per landmark (x, y, z)
pub const LANDMARK_STRIDE: usize = 3;

/// 33 landmarks × 3 coordinates
pub const POSE_FLOATS: usize = POSE_LANDMARK_COUNT * LANDMARK_STRIDE;

/// Parse a flat landmark array
///
/// - empty: no pose detected this frame
/// - 99 floats: one frame; a NaN coordinate marks that landmark untracked
/// - anything else: rejected
///
/// Depth (z) is not used by the pointer and is skipped.
pub fn parse_pose(data: &[f32]) -> Result<PoseFrame, BridgeError> {
    if data.is_empty() {
        return Ok(PoseFrame::empty());
    }
    if data.len() != POSE_FLOATS {
        return Err(BridgeError::InvalidPoseLength(data.len()));
    }

    let mut frame = PoseFrame::empty();
    for (i, chunk) in data.chunks_exact(LANDMARK_STRIDE).enumerate() {
        frame.set(i, NormalizedPoint::from_raw(chunk[0], chunk[1]));
    }
    Ok(frame)
}

/// Parse a single wrist/shoulder pair; NaN marks a missing point
pub fn parse_point(x: f32, y: f32) -> Option<NormalizedPoint> {
    NormalizedPoint::from_raw(x, y)
}
