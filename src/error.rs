//! Crate-level error types.

use std::fmt;

/// Errors produced by the vitrine crate.
#[derive(Debug)]
pub enum VitrineError {
    /// A frame sequence was built with no frames.
    EmptySequence,
    /// Frame cadence must be a positive number of milliseconds.
    InvalidCadence(u64),
    /// A damping factor outside the open interval (0, 1).
    InvalidDamping {
        /// Which factor was rejected.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// An options value failed validation.
    InvalidOptions(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// A frame image or 3D model failed to load.
    AssetLoad(String),
}

impl fmt::Display for VitrineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence => {
                write!(f, "frame sequence must contain at least one frame")
            }
            Self::InvalidCadence(ms) => write!(
                f,
                "frame cadence must be a positive number of milliseconds, \
                 got {ms}"
            ),
            Self::InvalidDamping { name, value } => write!(
                f,
                "damping factor `{name}` must lie strictly between 0 and 1, \
                 got {value}"
            ),
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::AssetLoad(msg) => write!(f, "asset load error: {msg}"),
        }
    }
}

impl std::error::Error for VitrineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VitrineError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
