use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;
use crate::input::DeviceClass;
use crate::util::damping::DampingFactor;

/// Hand-tuned starting orientations (Euler XYZ, radians).
pub const ORIENTATION_PRESETS: [[f32; 3]; 7] = [
    [0.35, -0.62, 0.12],
    [-0.28, 0.84, -0.18],
    [0.92, 0.21, 0.47],
    [-0.71, -0.39, 0.30],
    [0.18, 1.23, -0.56],
    [1.08, -1.02, 0.04],
    [-0.47, 0.52, 0.91],
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Kinematics", inline)]
#[serde(default)]
/// Gains and damping for the scroll/pointer driven model motion.
pub struct KinematicsOptions {
    /// Positional velocity per pixel of scroll delta.
    #[schemars(title = "Scroll Gain", range(min = 0.0, max = 0.05), extend("step" = 0.001))]
    pub scroll_velocity_gain: f32,
    /// Per-frame decay applied to the vertical position.
    #[schemars(title = "Scroll Damping", range(min = 0.5, max = 0.999), extend("step" = 0.001))]
    pub scroll_damping: f32,
    /// Per-frame decay applied to positional velocity.
    #[schemars(title = "Velocity Damping", range(min = 0.5, max = 0.999), extend("step" = 0.001))]
    pub positional_velocity_damping: f32,
    /// Fraction of positional velocity fed into X rotation.
    #[schemars(skip)]
    pub scroll_rotation_gain: f32,
    /// Rotational velocity added per unit of surface normal.
    #[schemars(title = "Impulse Gain", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub impulse_gain: f32,
    /// Per-frame decay applied to rotational velocity.
    #[schemars(title = "Spin Damping", range(min = 0.5, max = 0.999), extend("step" = 0.001))]
    pub rotational_velocity_damping: f32,
    /// Fraction of damped rotational velocity applied to rotation per frame.
    #[schemars(skip)]
    pub rotation_step: f32,
    /// Viewport divisor for the model scale on constrained contexts.
    #[schemars(skip)]
    pub scale_divisor_constrained: f32,
    /// Viewport divisor for the model scale on desktop contexts.
    #[schemars(skip)]
    pub scale_divisor_desktop: f32,
    /// Upper bound on the uniform model scale.
    #[schemars(skip)]
    pub max_scale: f32,
    /// Candidate starting orientations, one picked uniformly at setup.
    #[schemars(skip)]
    pub orientation_presets: Vec<[f32; 3]>,
}

impl Default for KinematicsOptions {
    fn default() -> Self {
        Self {
            scroll_velocity_gain: 0.005,
            scroll_damping: 0.92,
            positional_velocity_damping: 0.91,
            scroll_rotation_gain: 0.5,
            impulse_gain: 0.5,
            rotational_velocity_damping: 0.97,
            rotation_step: 0.1,
            scale_divisor_constrained: 550.0,
            scale_divisor_desktop: 800.0,
            max_scale: 0.8,
            orientation_presets: ORIENTATION_PRESETS.to_vec(),
        }
    }
}

/// Validated damping factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampingSet {
    /// Vertical position decay.
    pub scroll: DampingFactor,
    /// Positional velocity decay.
    pub positional_velocity: DampingFactor,
    /// Rotational velocity decay.
    pub rotational_velocity: DampingFactor,
}

impl KinematicsOptions {
    /// Validate and collect the three damping factors.
    pub fn damping(&self) -> Result<DampingSet, VitrineError> {
        Ok(DampingSet {
            scroll: DampingFactor::new("scroll_damping", self.scroll_damping)?,
            positional_velocity: DampingFactor::new(
                "positional_velocity_damping",
                self.positional_velocity_damping,
            )?,
            rotational_velocity: DampingFactor::new(
                "rotational_velocity_damping",
                self.rotational_velocity_damping,
            )?,
        })
    }

    /// Scale divisor for the given device class.
    pub fn scale_divisor(&self, device: DeviceClass) -> f32 {
        match device {
            DeviceClass::Constrained => self.scale_divisor_constrained,
            DeviceClass::Desktop => self.scale_divisor_desktop,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), VitrineError> {
        let _ = self.damping()?;
        if self.orientation_presets.is_empty() {
            return Err(VitrineError::InvalidOptions(
                "kinematics.orientation_presets must not be empty".to_owned(),
            ));
        }
        if self.scale_divisor_constrained <= 0.0
            || self.scale_divisor_desktop <= 0.0
            || self.max_scale <= 0.0
        {
            return Err(VitrineError::InvalidOptions(
                "kinematics scale divisors and max_scale must be positive"
                    .to_owned(),
            ));
        }
        Ok(())
    }
}
