//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a pointer gesture,
//! GUI control, or programmatic call — is represented as a
//! `HolowinCommand`. Consumers construct commands and pass them to
//! [`HolowinEngine::execute`](super::HolowinEngine::execute).

use glam::Vec2;

use crate::model::ModelTransform;

/// A discrete or parameterized operation the engine can perform.
///
/// This is the single, centralized description of what the engine can do
/// interactively. The engine never cares *how* a command was triggered —
/// pointer, GUI, or API all look identical:
///
/// ```ignore
/// engine.execute(HolowinCommand::DollyModel { delta: 100.0 });
/// engine.execute(HolowinCommand::ResetModel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HolowinCommand {
    /// Spin/tilt the model by a cursor delta (degrees per pixel applied
    /// by the transform controller).
    RotateModel {
        /// Cursor delta in physical pixels.
        delta: Vec2,
    },
    /// Translate the model in the window plane by a cursor delta.
    PanModel {
        /// Cursor delta in physical pixels.
        delta: Vec2,
    },
    /// Dolly the model along the depth axis (positive = away).
    DollyModel {
        /// Vertical scroll amount in pixel-equivalent units.
        delta: f32,
    },
    /// Commit a fully specified transform (e.g. from numeric input
    /// controls). Clamped on commit, never rejected.
    SetModelTransform {
        /// The transform to commit.
        transform: ModelTransform,
    },
    /// Reset the interactive model pose to neutral.
    ResetModel,
}
