use crate::options::ViewportOptions;

/// Coarse classification of the host context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Narrow/mobile contexts: smaller divisors, zero visibility threshold.
    Constrained,
    /// Everything wider than the mobile breakpoint.
    Desktop,
}

/// Viewport dimensions in CSS pixels, as reported by the host layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Inner width.
    pub width: f32,
    /// Inner height.
    pub height: f32,
    /// Device class derived from the width.
    pub device: DeviceClass,
}

impl Viewport {
    /// Classify a viewport against the configured mobile breakpoint.
    pub fn new(width: f32, height: f32, options: &ViewportOptions) -> Self {
        let device = if width <= options.mobile_breakpoint {
            DeviceClass::Constrained
        } else {
            DeviceClass::Desktop
        };
        Self::with_device(width, height, device)
    }

    /// Viewport with an explicit device class.
    pub fn with_device(width: f32, height: f32, device: DeviceClass) -> Self {
        Self {
            width,
            height,
            device,
        }
    }

    /// Whether this is a constrained (mobile) context.
    pub fn is_constrained(&self) -> bool {
        self.device == DeviceClass::Constrained
    }

    /// Width / height, or 1.0 for a degenerate viewport.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}
