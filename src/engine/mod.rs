//! Per-frame orchestration of camera and model state.
//!
//! The engine owns the head-tracked camera, the model-transform
//! controller, and the runtime options. An external render loop drives
//! it: poll the pose source, call [`HolowinEngine::advance_frame`], draw
//! with the returned [`CameraFrame`] and the current model transform.
//! Pointer commands arrive between frames via
//! [`HolowinEngine::execute`]. Everything runs on one cooperative
//! execution context, so per-frame reads always observe whole committed
//! values.

mod command;

use std::path::Path;

pub use command::HolowinCommand;

use crate::camera::{CameraFrame, HeadTrackedCamera};
use crate::model::{Aabb, ModelFit, ModelTransform, TransformController};
use crate::options::Options;
use crate::tracking::HeadPose;

/// Owns all mutable viewing state and dispatches commands to it.
pub struct HolowinEngine {
    camera: HeadTrackedCamera,
    model: TransformController,
    options: Options,
}

impl HolowinEngine {
    /// Create an engine for the given viewport size.
    #[must_use]
    pub fn new(options: Options, viewport: (u32, u32)) -> Self {
        let camera = HeadTrackedCamera::new(
            options.tracking,
            &options.camera,
            viewport,
        );
        let model = TransformController::new(options.interaction);
        Self {
            camera,
            model,
            options,
        }
    }

    /// Advance one frame: smooth the pose sample (if any) and rebuild
    /// the off-axis projection. Returns the frame output the renderer
    /// should adopt wholesale.
    pub fn advance_frame(&mut self, pose: Option<HeadPose>) -> CameraFrame {
        self.camera.update(pose)
    }

    /// Execute one interactive command.
    pub fn execute(&mut self, cmd: HolowinCommand) {
        match cmd {
            HolowinCommand::RotateModel { delta } => {
                self.model.rotate_drag(delta);
            }
            HolowinCommand::PanModel { delta } => self.model.pan_drag(delta),
            HolowinCommand::DollyModel { delta } => self.model.dolly(delta),
            HolowinCommand::SetModelTransform { transform } => {
                self.model.set_transform(transform);
            }
            HolowinCommand::ResetModel => self.model.reset(),
        }
    }

    /// Note a viewport resize; picked up on the next frame.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Register a newly loaded model by its bounding box, auto-fitting
    /// it to the standard display size and resetting the interactive
    /// pose. Returns the fit for the caller's scene node.
    ///
    /// Asset decoding happens outside the engine; a load that fails
    /// never reaches this call, so camera and transform state survive
    /// failed loads untouched.
    pub fn load_model(&mut self, bounds: Aabb) -> ModelFit {
        self.model.load_model(bounds)
    }

    /// Snapshot of the current interactive model transform.
    #[must_use]
    pub fn model_transform(&self) -> ModelTransform {
        self.model.transform()
    }

    /// Head-tracked camera state (e.g. for uploading the uniform).
    #[must_use]
    pub fn camera(&self) -> &HeadTrackedCamera {
        &self.camera
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and push the changes to the controllers.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values to the camera and model controllers.
    fn apply_options(&mut self) {
        self.camera.set_tracking_options(self.options.tracking);
        self.camera.set_camera_options(&self.options.camera);
        self.model.set_options(self.options.interaction);
    }

    /// Load a named view preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded view preset '{name}'");
                self.set_options(opts);
                true
            }
            Err(e) => {
                log::error!("Failed to load view preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named view preset.
    /// Returns true on success.
    pub fn save_preset(&self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved view preset '{name}'");
                true
            }
            Err(e) => {
                log::error!("Failed to save view preset '{name}': {e}");
                false
            }
        }
    }
}
