use glam::Vec2;

use super::fit::{Aabb, ModelFit};
use super::transform::ModelTransform;
use crate::options::InteractionOptions;

/// Single logical owner of the displayed model's pose.
///
/// Pointer gestures, scroll dolly, and external callers (numeric input
/// controls) all mutate the transform through this controller, and every
/// path commits through the same clamp — the contract is "always produces
/// a valid renderable state", never strict validation. Within one frame
/// there is exactly one writer, so the render step reads a consistent
/// snapshot.
pub struct TransformController {
    transform: ModelTransform,
    fit: ModelFit,
    opts: InteractionOptions,
}

impl TransformController {
    /// Create a controller with a neutral pose and no fitted model.
    #[must_use]
    pub fn new(opts: InteractionOptions) -> Self {
        Self {
            transform: ModelTransform::default(),
            fit: ModelFit::default(),
            opts,
        }
    }

    /// Snapshot copy of the current transform.
    #[must_use]
    pub fn transform(&self) -> ModelTransform {
        self.transform
    }

    /// Fit applied to the currently loaded model's asset node.
    #[must_use]
    pub fn fit(&self) -> ModelFit {
        self.fit
    }

    /// Commit a fully specified transform from an external caller.
    ///
    /// Out-of-range values are silently clamped, never rejected.
    pub fn set_transform(&mut self, transform: ModelTransform) {
        self.transform = transform.clamped();
    }

    /// Replace the interaction parameters (gesture sensitivities).
    pub fn set_options(&mut self, opts: InteractionOptions) {
        self.opts = opts;
    }

    /// Apply a rotate-drag delta (primary-button drag), in pixels.
    ///
    /// Horizontal motion spins the model about its vertical axis,
    /// vertical motion tilts it, both in degrees per pixel.
    pub fn rotate_drag(&mut self, delta: Vec2) {
        let mut t = self.transform;
        t.rotation_degrees.y += delta.x * self.opts.rotate_speed;
        t.rotation_degrees.x += delta.y * self.opts.rotate_speed;
        self.transform = t.clamped();
    }

    /// Apply a pan-drag delta (secondary-button drag), in pixels.
    ///
    /// Screen-down drags move the model down, hence the inverted y.
    pub fn pan_drag(&mut self, delta: Vec2) {
        let mut t = self.transform;
        t.position.x += delta.x * self.opts.pan_speed;
        t.position.y -= delta.y * self.opts.pan_speed;
        self.transform = t.clamped();
    }

    /// Apply a scroll-wheel delta, dollying the model along the depth
    /// axis. Scrolling down (positive delta) pushes the model away.
    pub fn dolly(&mut self, delta_y: f32) {
        let mut t = self.transform;
        t.position.z -= delta_y * self.opts.dolly_speed;
        self.transform = t.clamped();
    }

    /// Reset the interactive pose to neutral. The fit of the loaded
    /// model is unaffected.
    pub fn reset(&mut self) {
        self.transform = ModelTransform::default();
    }

    /// Register a newly loaded model by its bounding box.
    ///
    /// Computes the auto-fit (target size from the interaction options),
    /// resets the interactive pose to neutral, and returns the fit for
    /// the caller to apply to the asset's scene node. A failed load never
    /// reaches this point — camera and transform state stay as they were.
    pub fn load_model(&mut self, bounds: Aabb) -> ModelFit {
        self.fit = ModelFit::from_bounds(bounds, self.opts.fit_target_size);
        self.transform = ModelTransform::default();
        log::info!(
            "fitted model: scale {:.4}, offset {:?}",
            self.fit.scale,
            self.fit.offset
        );
        self.fit
    }
}
