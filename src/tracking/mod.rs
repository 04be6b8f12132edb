//! Head-pose input for the parallax camera.
//!
//! The actual pose estimation (face/landmark detection from video) is an
//! external collaborator; this module defines the normalized pose value it
//! produces, a pull-based source abstraction polled once per render tick,
//! and the exponential smoother that turns raw samples into a stable
//! camera eye position.

/// Normalized head-pose sample and pull-based pose sources.
pub mod pose;
/// Exponential smoothing of pose samples into a clamped eye position.
pub mod smoother;

pub use pose::{HeadPose, PoseSource, SharedPoseSlot};
pub use smoother::PoseSmoother;
