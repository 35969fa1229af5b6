use glam::Vec2;

use super::Viewport;

/// Tracks the last pointer position, in pixels and in normalized device
/// coordinates (x right, y up, both in `[-1, 1]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PointerState {
    pub(crate) position: Vec2,
    pub(crate) ndc: Vec2,
}

impl PointerState {
    /// Pointer parked at the viewport center.
    pub(crate) fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            ndc: Vec2::ZERO,
        }
    }

    /// Update from a pixel position within `viewport`.
    pub(crate) fn handle_pointer_moved(
        &mut self,
        x: f32,
        y: f32,
        viewport: &Viewport,
    ) {
        self.position = Vec2::new(x, y);
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return;
        }
        self.ndc = Vec2::new(
            (x / viewport.width) * 2.0 - 1.0,
            -((y / viewport.height) * 2.0 - 1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DeviceClass;

    #[test]
    fn maps_pixels_to_ndc() {
        let vp = Viewport::with_device(800.0, 600.0, DeviceClass::Desktop);
        let mut p = PointerState::new();
        p.handle_pointer_moved(0.0, 0.0, &vp);
        assert_eq!(p.ndc, Vec2::new(-1.0, 1.0));
        p.handle_pointer_moved(400.0, 300.0, &vp);
        assert_eq!(p.ndc, Vec2::ZERO);
        p.handle_pointer_moved(800.0, 600.0, &vp);
        assert_eq!(p.ndc, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn zero_sized_viewport_keeps_previous_ndc() {
        let vp = Viewport::with_device(0.0, 0.0, DeviceClass::Desktop);
        let mut p = PointerState::new();
        p.handle_pointer_moved(10.0, 10.0, &vp);
        assert_eq!(p.ndc, Vec2::ZERO);
        assert_eq!(p.position, Vec2::new(10.0, 10.0));
    }
}
