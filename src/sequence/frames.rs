//! Frame sequences and the image assets behind each frame.

use std::sync::Arc;

use crate::error::VitrineError;
use crate::input::{DeviceClass, Viewport};
use crate::options::FrameOptions;

/// Ordered, immutable list of frame identifiers. Index 0 is the rest frame.
///
/// Cloning is cheap; clones share the same identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Arc<[String]>,
}

impl FrameSequence {
    /// Build a sequence; empty input is rejected.
    pub fn new<I, S>(frames: I) -> Result<Self, VitrineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let frames: Arc<[String]> = frames.into_iter().map(Into::into).collect();
        if frames.is_empty() {
            return Err(VitrineError::EmptySequence);
        }
        Ok(Self { frames })
    }

    /// Number of frames (at least one).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the final frame.
    pub fn last_index(&self) -> usize {
        self.frames.len() - 1
    }

    /// Identifier at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.frames.get(index).map(String::as_str)
    }

    /// All identifiers in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(String::as_str)
    }
}

/// Image URIs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameUris {
    /// Low-resolution placeholder shown until the final image arrives.
    pub placeholder: String,
    /// Final image, sized for the device class.
    pub high_res: String,
}

/// Derives a frame's image URIs from its identifier.
pub trait FrameAssetSource {
    /// URIs for `frame_id` on the given device class.
    fn uris(&self, frame_id: &str, device: DeviceClass) -> FrameUris;
}

/// `{base_url}/{variant}/{frame_id}.{extension}`, with variant
/// `placeholder`, `mobile` or `desktop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathAssetSource {
    base_url: String,
    extension: String,
}

impl PathAssetSource {
    /// Source rooted at `base_url`; a trailing slash is ignored.
    pub fn new(base_url: &str, extension: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            extension: extension.trim_start_matches('.').to_owned(),
        }
    }

    /// Source configured from the frame options.
    pub fn from_options(options: &FrameOptions) -> Self {
        Self::new(&options.base_url, &options.extension)
    }

    fn uri(&self, variant: &str, frame_id: &str) -> String {
        format!("{}/{variant}/{frame_id}.{}", self.base_url, self.extension)
    }
}

impl FrameAssetSource for PathAssetSource {
    fn uris(&self, frame_id: &str, device: DeviceClass) -> FrameUris {
        let variant = match device {
            DeviceClass::Constrained => "mobile",
            DeviceClass::Desktop => "desktop",
        };
        FrameUris {
            placeholder: self.uri("placeholder", frame_id),
            high_res: self.uri(variant, frame_id),
        }
    }
}

/// Display scale for frame images: viewport width over the device's
/// divisor, capped at `max_frame_scale`.
pub fn frame_scale(viewport: &Viewport, options: &FrameOptions) -> f32 {
    let divisor = options.scale_divisor(viewport.device);
    (viewport.width / divisor).min(options.max_frame_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_rejected() {
        let err = FrameSequence::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, VitrineError::EmptySequence));
    }

    #[test]
    fn sequence_accessors() {
        let seq = FrameSequence::new(["f0", "f1", "f2"]).unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.last_index(), 2);
        assert_eq!(seq.get(1), Some("f1"));
        assert_eq!(seq.get(3), None);
        assert_eq!(seq.iter().collect::<Vec<_>>(), ["f0", "f1", "f2"]);
    }

    #[test]
    fn uris_depend_on_device_class() {
        let src = PathAssetSource::new("https://cdn.test/frames/", ".webp");
        let desktop = src.uris("f7", DeviceClass::Desktop);
        assert_eq!(desktop.placeholder, "https://cdn.test/frames/placeholder/f7.webp");
        assert_eq!(desktop.high_res, "https://cdn.test/frames/desktop/f7.webp");
        let mobile = src.uris("f7", DeviceClass::Constrained);
        assert_eq!(mobile.placeholder, desktop.placeholder);
        assert_eq!(mobile.high_res, "https://cdn.test/frames/mobile/f7.webp");
    }

    #[test]
    fn frame_scale_uses_device_divisor_and_cap() {
        let opts = FrameOptions::default();
        let phone = Viewport::with_device(175.0, 700.0, DeviceClass::Constrained);
        assert!((frame_scale(&phone, &opts) - 0.5).abs() < 1e-6);
        let laptop = Viewport::with_device(150.0, 700.0, DeviceClass::Desktop);
        assert!((frame_scale(&laptop, &opts) - 0.5).abs() < 1e-6);
        let wide = Viewport::with_device(1920.0, 1080.0, DeviceClass::Desktop);
        assert_eq!(frame_scale(&wide, &opts), 1.0);
    }
}
