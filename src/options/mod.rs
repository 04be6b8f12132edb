//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (tracking response, virtual window geometry,
//! pointer gesture sensitivities) are consolidated here. Options
//! serialize to/from TOML for view presets; the JSON schema drives the
//! external settings UI.

mod camera;
mod interaction;
mod tracking;

use std::path::Path;

pub use camera::CameraOptions;
pub use interaction::InteractionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use tracking::TrackingOptions;

use crate::error::HolowinError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[tracking]`) work
/// correctly.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Head-tracking response parameters.
    pub tracking: TrackingOptions,
    /// Virtual window and projection parameters.
    pub camera: CameraOptions,
    /// Pointer gesture sensitivities and model fitting.
    pub interaction: InteractionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, HolowinError> {
        let content =
            std::fs::read_to_string(path).map_err(HolowinError::Io)?;
        toml::from_str(&content)
            .map_err(|e| HolowinError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), HolowinError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HolowinError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(HolowinError::Io)?;
        }
        std::fs::write(path, content).map_err(HolowinError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[tracking]
lerp_factor = 0.25
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.tracking.lerp_factor, 0.25);
        // Everything else should be default
        assert_eq!(opts.tracking.sensitivity_x, 8.0);
        assert_eq!(opts.camera.window_width, 10.0);
        assert_eq!(opts.interaction.rotate_speed, 0.5);
    }

    #[test]
    fn documented_defaults() {
        let opts = Options::default();
        assert_eq!(opts.tracking.sensitivity_x, 8.0);
        assert_eq!(opts.tracking.sensitivity_y, 6.0);
        assert_eq!(opts.tracking.sensitivity_z, 10.0);
        assert_eq!(opts.tracking.sensitivity_scale, 0.5);
        assert_eq!(opts.tracking.lerp_factor, 0.1);
        assert_eq!(opts.interaction.fit_target_size, 3.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("tracking"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("interaction"));

        // Tracking should expose sensitivities but not internal scaling.
        let tracking = &props["tracking"]["properties"];
        assert!(tracking.get("sensitivity_x").is_some());
        assert!(tracking.get("lerp_factor").is_some());
        assert!(tracking.get("sensitivity_scale").is_none());
        assert!(tracking.get("base_distance").is_none());

        // Camera clip planes are not UI-exposed.
        let camera = &props["camera"]["properties"];
        assert!(camera.get("window_width").is_some());
        assert!(camera.get("znear").is_none());
    }
}
