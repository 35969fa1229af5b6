//! Scroll- and pointer-driven model motion.
//!
//! [`KinematicsIntegrator`] owns the numeric state; [`ModelStage`] mounts it
//! against the page's listeners and the model loader.

pub mod integrator;
mod scroll;
pub mod setup;
pub mod stage;
pub mod state;

pub use integrator::{KinematicsIntegrator, LoadState};
pub use setup::{decorate_scene, model_scale, pick_orientation};
pub use stage::{ModelStage, WindowEvents, WindowSignal};
pub use state::{KinematicState, OneShotLatch, ScrollDirection};
