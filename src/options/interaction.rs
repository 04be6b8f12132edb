use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Pointer gesture sensitivities and model fitting parameters.
pub struct InteractionOptions {
    /// Rotate-drag sensitivity in degrees per pixel.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Pan-drag sensitivity in world units per pixel.
    #[schemars(title = "Pan Speed", range(min = 0.005, max = 0.1), extend("step" = 0.005))]
    pub pan_speed: f32,
    /// Scroll-dolly sensitivity in world units per scroll unit.
    #[schemars(title = "Dolly Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub dolly_speed: f32,
    /// Target size for auto-fitting a loaded model's largest dimension.
    #[schemars(skip)]
    pub fit_target_size: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.5,
            pan_speed: 0.02,
            dolly_speed: 0.01,
            fit_target_size: 3.0,
        }
    }
}
