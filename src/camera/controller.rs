use glam::Vec3;

use super::core::{CameraFrame, CameraUniform, WindowCamera};
use crate::options::{CameraOptions, TrackingOptions};
use crate::tracking::{HeadPose, PoseSmoother};

/// Head-tracked camera controller.
///
/// Owns the pose smoother and the window camera, and drives the per-frame
/// pipeline: smooth the latest pose sample into an eye position, then
/// recompute the off-axis projection from it. The aspect ratio is read
/// fresh on every update (via [`resize`](Self::resize) notifications) so
/// window resizes take effect on the next frame.
pub struct HeadTrackedCamera {
    smoother: PoseSmoother,
    camera: WindowCamera,
    /// GPU-uploadable mirror of the latest frame output.
    pub uniform: CameraUniform,
}

impl HeadTrackedCamera {
    /// Create a controller at the default eye position.
    #[must_use]
    pub fn new(
        tracking: TrackingOptions,
        camera_opts: &CameraOptions,
        (width, height): (u32, u32),
    ) -> Self {
        let smoother = PoseSmoother::new(tracking);
        let camera = WindowCamera {
            eye: smoother.current(),
            aspect: width as f32 / height as f32,
            window_width: camera_opts.window_width,
            znear: camera_opts.znear,
            zfar: camera_opts.zfar,
        };
        let mut uniform = CameraUniform::new();
        uniform.update_from_frame(&camera.frame(), camera.aspect);

        Self {
            smoother,
            camera,
            uniform,
        }
    }

    /// Advance one frame: smooth the pose (if present) and rebuild the
    /// projection.
    ///
    /// A `None` pose leaves the smoothed eye untouched; the projection is
    /// still recomputed so resize notifications are picked up. Returns a
    /// fresh immutable [`CameraFrame`] for the renderer to adopt.
    pub fn update(&mut self, pose: Option<HeadPose>) -> CameraFrame {
        self.smoother.update(pose);
        self.camera.eye = self.smoother.current();

        let frame = self.camera.frame();
        self.uniform.update_from_frame(&frame, self.camera.aspect);
        frame
    }

    /// Note a viewport resize; the new aspect ratio is used on the next
    /// update.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height as f32;
    }

    /// The current smoothed eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.smoother.current()
    }

    /// Replace the tracking parameters. Takes effect on the next update.
    pub fn set_tracking_options(&mut self, tracking: TrackingOptions) {
        self.smoother.set_options(tracking);
    }

    /// Replace the projection parameters. Takes effect on the next update.
    pub fn set_camera_options(&mut self, camera_opts: &CameraOptions) {
        self.camera.window_width = camera_opts.window_width;
        self.camera.znear = camera_opts.znear;
        self.camera.zfar = camera_opts.zfar;
    }
}
