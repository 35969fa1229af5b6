//! Shared numeric helpers.

pub mod damping;
