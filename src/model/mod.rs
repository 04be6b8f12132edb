//! Interactive transform of the displayed model.
//!
//! The model inside the virtual window can be rotated, panned, and
//! dollied with pointer input, and is auto-fitted to a standard display
//! size when loaded. All commit paths clamp the transform so the model
//! can never cross the window plane toward the viewer.

/// Single-writer controller applying gestures and clamped commits.
pub mod controller;
/// Bounding boxes and auto-fit scale/recenter computation.
pub mod fit;
/// The transform value type and its domain clamps.
pub mod transform;

pub use controller::TransformController;
pub use fit::{Aabb, ModelFit};
pub use transform::ModelTransform;
