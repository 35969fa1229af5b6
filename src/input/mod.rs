//! Input handling: platform-agnostic window/pointer events, viewport
//! classification, and pointer tracking in normalized device coordinates.

/// Platform-agnostic input events.
pub mod event;
/// Pointer position tracking.
pub(crate) mod mouse;
/// Viewport size and device classification.
pub mod viewport;

pub use event::{InputEvent, SurfaceEventKind};
pub use viewport::{DeviceClass, Viewport};
