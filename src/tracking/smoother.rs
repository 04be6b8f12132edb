use glam::Vec3;

use super::pose::HeadPose;
use crate::options::TrackingOptions;

/// Lower corner of the bounded viewing volume the eye may occupy.
pub const EYE_MIN: Vec3 = Vec3::new(-5.0, -4.0, 8.0);
/// Upper corner of the bounded viewing volume the eye may occupy.
pub const EYE_MAX: Vec3 = Vec3::new(5.0, 4.0, 25.0);

/// First-order low-pass filter turning raw head-pose samples into a
/// stable camera eye position.
///
/// Each update maps the pose through per-axis sensitivities into a target
/// eye position, clamps the target into the bounded viewing volume (so
/// noisy or extreme tracking input can never run away), then moves the
/// current position a fixed fraction toward the target.
///
/// The lerp is applied once per call with a fixed factor and is *not*
/// delta-time corrected: smoothing responsiveness is coupled to the call
/// cadence (one call per display refresh). This matches the shipped
/// behavior and is kept deliberately.
#[derive(Debug, Clone)]
pub struct PoseSmoother {
    target: Vec3,
    current: Vec3,
    opts: TrackingOptions,
}

impl PoseSmoother {
    /// Default eye position before any pose has been seen.
    pub const INITIAL_EYE: Vec3 = Vec3::new(0.0, 0.0, 5.0);

    /// Create a smoother at the default eye position.
    #[must_use]
    pub fn new(opts: TrackingOptions) -> Self {
        Self {
            target: Self::INITIAL_EYE,
            current: Self::INITIAL_EYE,
            opts,
        }
    }

    /// The smoothed eye position consumed by projection recomputation.
    #[must_use]
    pub fn current(&self) -> Vec3 {
        self.current
    }

    /// The clamped target derived from the latest pose sample.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Replace the tracking parameters. Takes effect on the next update.
    pub fn set_options(&mut self, opts: TrackingOptions) {
        self.opts = opts;
    }

    /// Feed one pose sample (or its absence) into the filter.
    ///
    /// `None` means no face was detected this frame: the state is left
    /// untouched and the camera holds its last position. A present pose
    /// recomputes the target and advances the smoothed position one lerp
    /// step toward it.
    ///
    /// The horizontal axis is sign-inverted so the camera moves opposite
    /// the viewer's lateral offset, which is what makes the window
    /// parallax read correctly.
    pub fn update(&mut self, pose: Option<HeadPose>) {
        let Some(pose) = pose else {
            return;
        };

        let scale = self.opts.sensitivity_scale;
        let raw = Vec3::new(
            -pose.x * self.opts.sensitivity_x * scale,
            pose.y * self.opts.sensitivity_y * scale,
            self.opts.base_distance
                + pose.z * self.opts.sensitivity_z * self.opts.proximity_gain,
        );

        self.target = raw.clamp(EYE_MIN, EYE_MAX);
        self.current = self.current.lerp(self.target, self.opts.lerp_factor);
    }
}
