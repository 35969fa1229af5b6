use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewport", inline)]
#[serde(default)]
/// How the host viewport is classified.
pub struct ViewportOptions {
    /// Widths at or below this many pixels count as constrained (mobile).
    #[schemars(title = "Mobile Breakpoint", range(min = 0.0, max = 2000.0), extend("step" = 1.0))]
    pub mobile_breakpoint: f32,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
        }
    }
}
