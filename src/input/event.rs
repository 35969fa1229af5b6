use crate::scene::Intersection;

/// Platform-agnostic events delivered to a mounted model stage.
///
/// The host translates its native scroll/resize/pointer callbacks into these
/// and feeds them to [`ModelStage::handle_event`](crate::kinematics::ModelStage::handle_event)
/// before the next rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Document scroll offset changed.
    Scroll {
        /// Absolute vertical scroll offset in pixels.
        offset: f32,
    },
    /// Window resized.
    Resize {
        /// New inner width in pixels.
        width: f32,
        /// New inner height in pixels.
        height: f32,
    },
    /// Pointer moved to an absolute position within the viewport.
    PointerMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// The renderer reported a pointer interaction with the model surface.
    Surface {
        /// Which interaction.
        kind: SurfaceEventKind,
        /// Nearest hit on the model.
        intersection: Intersection,
    },
}

/// Pointer interactions that deliver a rotational impulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceEventKind {
    /// Click on the model.
    Click,
    /// Pointer entered the model's silhouette.
    PointerEnter,
    /// Pointer left the model's silhouette.
    PointerLeave,
}
