//! Visibility-gated frame-sequence playback with dual-resolution images.

pub mod composite;
pub mod frames;
pub mod player;
pub mod stage;

pub use composite::{FrameLayers, HighResReveal, Layer};
pub use frames::{
    frame_scale, FrameAssetSource, FrameSequence, FrameUris, PathAssetSource,
};
pub use player::{FramePlayer, PlaybackState, TimerAction};
pub use stage::{FrameStage, IntervalTimer, VisibilityObserver};
