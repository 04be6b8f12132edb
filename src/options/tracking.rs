use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tracking", inline)]
#[serde(default)]
/// Head-tracking response parameters.
pub struct TrackingOptions {
    /// Horizontal sensitivity multiplier.
    #[schemars(title = "Horizontal Sensitivity", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub sensitivity_x: f32,
    /// Vertical sensitivity multiplier.
    #[schemars(title = "Vertical Sensitivity", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub sensitivity_y: f32,
    /// Depth (proximity) sensitivity multiplier.
    #[schemars(title = "Depth Sensitivity", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub sensitivity_z: f32,
    /// Global scale applied to the horizontal/vertical sensitivities.
    #[schemars(skip)]
    pub sensitivity_scale: f32,
    /// Base camera distance from the window plane.
    #[schemars(skip)]
    pub base_distance: f32,
    /// Gain on the proximity term added to the base distance.
    #[schemars(skip)]
    pub proximity_gain: f32,
    /// Smoothing lerp factor per update (lower = smoother, laggier).
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub lerp_factor: f32,
}

impl Default for TrackingOptions {
    fn default() -> Self {
        Self {
            sensitivity_x: 8.0,
            sensitivity_y: 6.0,
            sensitivity_z: 10.0,
            sensitivity_scale: 0.5,
            base_distance: 10.0,
            proximity_gain: 0.3,
            lerp_factor: 0.1,
        }
    }
}
