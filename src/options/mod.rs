//! Centralized motion options with TOML preset support.
//!
//! All tweakable settings (frame cadence and visibility gating, kinematic
//! gains and damping, lighting, camera, viewport classification) are
//! consolidated here. Options serialize to/from TOML so a page can ship a
//! preset alongside its assets.

mod camera;
mod frames;
mod kinematics;
mod lighting;
mod viewport;

use std::path::Path;

pub use camera::CameraOptions;
pub use frames::FrameOptions;
pub use kinematics::{DampingSet, KinematicsOptions, ORIENTATION_PRESETS};
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use viewport::ViewportOptions;

use crate::error::VitrineError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[frames]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Frame-sequence playback.
    pub frames: FrameOptions,
    /// Model kinematics.
    pub kinematics: KinematicsOptions,
    /// Light rig added at setup.
    pub lighting: LightingOptions,
    /// Ray-casting camera.
    pub camera: CameraOptions,
    /// Viewport classification.
    pub viewport: ViewportOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults; the result
    /// is validated before it is returned.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse and validate options from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, VitrineError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
    }

    /// Reject malformed configuration before any engine is built.
    pub fn validate(&self) -> Result<(), VitrineError> {
        self.frames.validate()?;
        self.kinematics.validate()?;
        if self.camera.znear <= 0.0 || self.camera.zfar <= self.camera.znear {
            return Err(VitrineError::InvalidOptions(format!(
                "camera clip planes must satisfy 0 < znear < zfar, got {} / {}",
                self.camera.znear, self.camera.zfar
            )));
        }
        Ok(())
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
    fn defaults_are_valid() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[frames]
ms_between_frame = 40
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.frames.ms_between_frame, 40);
        // Everything else should be default
        assert_eq!(opts.frames.visible_threshold, 0.1);
        assert_eq!(opts.kinematics.rotational_velocity_damping, 0.97);
        assert_eq!(opts.kinematics.orientation_presets.len(), 7);
    }

    #[test]
    fn zero_cadence_is_rejected() {
        let err = Options::from_toml("[frames]\nms_between_frame = 0\n")
            .unwrap_err();
        assert!(matches!(err, VitrineError::InvalidCadence(0)));
    }

    #[test]
    fn undamped_factor_is_rejected() {
        let err = Options::from_toml(
            "[kinematics]\nrotational_velocity_damping = 1.0\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            VitrineError::InvalidDamping {
                name: "rotational_velocity_damping",
                ..
            }
        ));
    }

    #[test]
    fn empty_preset_table_is_rejected() {
        let mut opts = Options::default();
        opts.kinematics.orientation_presets.clear();
        assert!(matches!(
            opts.validate(),
            Err(VitrineError::InvalidOptions(_))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[frames\n").unwrap_err();
        assert!(matches!(err, VitrineError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("vitrine-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.frames.crossfade_ms = 300;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("frames"));
        assert!(props.contains_key("kinematics"));
        assert!(props.contains_key("lighting"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("viewport"));

        // Exposed fields present, skipped ones absent
        let frames = &props["frames"]["properties"];
        assert!(frames.get("ms_between_frame").is_some());
        assert!(frames.get("base_url").is_none());
        let kinematics = &props["kinematics"]["properties"];
        assert!(kinematics.get("impulse_gain").is_some());
        assert!(kinematics.get("orientation_presets").is_none());
    }
}
