use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Virtual window and projection parameters.
pub struct CameraOptions {
    /// Width of the virtual window in world units.
    #[schemars(title = "Window Width", range(min = 2.0, max = 40.0), extend("step" = 0.5))]
    pub window_width: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            window_width: 10.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}
