//! Camera used to turn pointer positions into world-space rays.

/// Core camera struct and ray construction.
pub mod core;

pub use self::core::Camera;
