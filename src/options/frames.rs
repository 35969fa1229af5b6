use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::error::VitrineError;
use crate::input::DeviceClass;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Frames", inline)]
#[serde(default)]
/// Frame-sequence playback, visibility gating and asset layout.
pub struct FrameOptions {
    /// Milliseconds between frame advances. Must be positive.
    #[schemars(title = "Frame Interval (ms)", range(min = 1, max = 500), extend("step" = 1))]
    pub ms_between_frame: u64,
    /// Fraction of the element that must be on screen to count as visible.
    #[schemars(title = "Visibility Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub visible_threshold: f32,
    /// Threshold used instead on constrained (mobile) contexts.
    #[schemars(skip)]
    pub constrained_threshold: f32,
    /// Placeholder → high-res cross-fade length.
    #[schemars(title = "Cross-fade (ms)", range(min = 0, max = 2000), extend("step" = 10))]
    pub crossfade_ms: u64,
    /// Display-scale divisor on constrained contexts.
    #[schemars(skip)]
    pub scale_divisor_constrained: f32,
    /// Display-scale divisor on desktop contexts.
    #[schemars(skip)]
    pub scale_divisor_desktop: f32,
    /// Upper bound on the display scale.
    #[schemars(skip)]
    pub max_frame_scale: f32,
    /// Root URL the frame images live under.
    #[schemars(skip)]
    pub base_url: String,
    /// Image file extension, without the dot.
    #[schemars(skip)]
    pub extension: String,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            ms_between_frame: 15,
            visible_threshold: 0.1,
            constrained_threshold: 0.0,
            crossfade_ms: 150,
            scale_divisor_constrained: 350.0,
            scale_divisor_desktop: 300.0,
            max_frame_scale: 1.0,
            base_url: "/frames".to_owned(),
            extension: "webp".to_owned(),
        }
    }
}

impl FrameOptions {
    /// Validated cadence between frame advances.
    pub fn cadence(&self) -> Result<Duration, VitrineError> {
        if self.ms_between_frame == 0 {
            return Err(VitrineError::InvalidCadence(self.ms_between_frame));
        }
        Ok(Duration::from_millis(self.ms_between_frame))
    }

    /// Cross-fade duration.
    pub fn crossfade(&self) -> Duration {
        Duration::from_millis(self.crossfade_ms)
    }

    /// Visibility threshold for the given device class.
    pub fn threshold_for(&self, device: DeviceClass) -> f32 {
        match device {
            DeviceClass::Constrained => self.constrained_threshold,
            DeviceClass::Desktop => self.visible_threshold,
        }
    }

    /// Display-scale divisor for the given device class.
    pub fn scale_divisor(&self, device: DeviceClass) -> f32 {
        match device {
            DeviceClass::Constrained => self.scale_divisor_constrained,
            DeviceClass::Desktop => self.scale_divisor_desktop,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), VitrineError> {
        let _ = self.cadence()?;
        for (name, t) in [
            ("visible_threshold", self.visible_threshold),
            ("constrained_threshold", self.constrained_threshold),
        ] {
            if !(0.0..=1.0).contains(&t) {
                return Err(VitrineError::InvalidOptions(format!(
                    "frames.{name} must lie in [0, 1], got {t}"
                )));
            }
        }
        if self.scale_divisor_constrained <= 0.0
            || self.scale_divisor_desktop <= 0.0
            || self.max_frame_scale <= 0.0
        {
            return Err(VitrineError::InvalidOptions(
                "frames scale divisors and max_frame_scale must be positive"
                    .to_owned(),
            ));
        }
        Ok(())
    }
}
