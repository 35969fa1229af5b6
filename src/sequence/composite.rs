//! Dual-resolution compositing for the current frame.
//!
//! The placeholder image sits underneath and is fully opaque. The high-res
//! image is stacked above it, invisible until its load completes for the
//! frame currently shown, then cross-fades in while the placeholder fades
//! out. Readiness is keyed by frame index, so a late load for a frame that
//! is no longer current never reveals a stale image.

use web_time::{Duration, Instant};

use super::frames::FrameUris;

/// One image layer as the host should draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Image to draw.
    pub uri: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Stacking order; higher draws on top.
    pub z_index: i32,
}

/// Both layers for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayers {
    /// Low-resolution placeholder.
    pub placeholder: Layer,
    /// Final image.
    pub high_res: Layer,
}

/// Tracks which frame's high-res image has finished loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighResReveal {
    loaded: Option<(usize, Instant)>,
}

impl HighResReveal {
    /// Record that frame `index` finished loading at `at`.
    pub fn mark_loaded(&mut self, index: usize, at: Instant) {
        self.loaded = Some((index, at));
    }

    /// Forget any load; the placeholder takes over again.
    pub fn clear(&mut self) {
        self.loaded = None;
    }

    /// Whether frame `index` has its high-res image ready.
    pub fn is_loaded(&self, index: usize) -> bool {
        matches!(self.loaded, Some((loaded, _)) if loaded == index)
    }

    /// Cross-fade progress for frame `index` at `now`, in `[0, 1]`.
    pub fn progress(
        &self,
        index: usize,
        now: Instant,
        crossfade: Duration,
    ) -> f32 {
        match self.loaded {
            Some((loaded, at)) if loaded == index => {
                if crossfade.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(at);
                (elapsed.as_secs_f32() / crossfade.as_secs_f32()).min(1.0)
            }
            _ => 0.0,
        }
    }

    /// Layers for frame `index` given its URIs.
    pub fn layers(
        &self,
        index: usize,
        uris: FrameUris,
        now: Instant,
        crossfade: Duration,
    ) -> FrameLayers {
        let t = self.progress(index, now, crossfade);
        FrameLayers {
            placeholder: Layer {
                uri: uris.placeholder,
                opacity: 1.0 - t,
                z_index: 0,
            },
            high_res: Layer {
                uri: uris.high_res,
                opacity: t,
                z_index: 1,
            },
        }
    }
}
