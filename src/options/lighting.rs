use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Light rig attached to the model during one-shot setup.
pub struct LightingOptions {
    #[schemars(title = "Ambient", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    /// Ambient light intensity.
    pub ambient: f32,
    #[schemars(title = "Key Light", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    /// Key light intensity.
    pub key_intensity: f32,
    #[schemars(skip)]
    /// Key light position relative to the model.
    pub key_position: [f32; 3],
    #[schemars(title = "Fill Light", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    /// Fill light intensity.
    pub fill_intensity: f32,
    #[schemars(skip)]
    /// Fill light position relative to the model.
    pub fill_position: [f32; 3],
    #[schemars(title = "Rim Light", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    /// Rim light intensity.
    pub rim_intensity: f32,
    #[schemars(skip)]
    /// Rim light position relative to the model.
    pub rim_position: [f32; 3],
    #[schemars(skip)]
    /// Shared light color (linear RGB).
    pub color: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient: 0.4,
            key_intensity: 1.6,
            key_position: [5.0, 5.0, 5.0],
            fill_intensity: 0.6,
            fill_position: [-5.0, 2.0, 4.0],
            rim_intensity: 1.0,
            rim_position: [0.0, 4.0, -6.0],
            color: [1.0, 1.0, 1.0],
        }
    }
}
