// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![warn(unused_results)]
#![warn(unused_qualifications)]
// Cast hygiene
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Decorative, input-reactive motion for showcase pages.
//!
//! Two independent engines share one concurrency discipline: a single
//! cooperative update loop per instance, fed by asynchronous host events.
//!
//! # Key entry points
//!
//! - [`sequence::FramePlayer`] / [`sequence::FrameStage`] - plays an image
//!   sequence while its element is on screen, holding on the last frame and
//!   rewinding when it scrolls away, with placeholder → high-res
//!   cross-fades per frame
//! - [`kinematics::KinematicsIntegrator`] / [`kinematics::ModelStage`] -
//!   moves and spins a 3D model from scroll velocity and pointer impulses,
//!   damping every velocity exponentially each frame
//! - [`options::Options`] - every tunable, loadable from TOML
//!
//! # Architecture
//!
//! Engines never reach into the page. The host owns timers, observers,
//! listeners, the model loader and the renderer, and reaches the engines
//! through the collaborator traits in [`sequence`], [`kinematics`] and
//! [`scene`]. Every registration an engine acquires is held as a
//! [`lifecycle::Subscription`] and released exactly once on unmount.

pub mod camera;
pub mod error;
pub mod input;
pub mod kinematics;
pub mod lifecycle;
pub mod options;
pub mod scene;
pub mod sequence;
pub mod util;

pub use error::VitrineError;
