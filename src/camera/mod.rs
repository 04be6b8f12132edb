//! Head-tracked asymmetric-frustum camera.
//!
//! Converts a smoothed 3-D viewpoint into an off-axis (sheared)
//! projection so the rendered scene appears as a physically consistent
//! window when the viewer moves. The camera never rotates — only the
//! projection shears.

/// Head-tracked controller combining pose smoothing and projection.
pub mod controller;
/// Core camera struct, per-frame output, and GPU uniform types.
pub mod core;
/// Off-axis frustum bounds and projection matrix construction.
pub mod frustum;

pub use controller::HeadTrackedCamera;
pub use core::{CameraFrame, CameraUniform, WindowCamera};
pub use frustum::OffAxisFrustum;
