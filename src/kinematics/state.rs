//! Kinematic state owned by one integrator.

use glam::Vec3;

use crate::options::DampingSet;
use crate::util::damping::{DampedScalar, Velocity3};

/// Sign of the last scroll delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    /// Offset decreased.
    Negative,
    /// No movement.
    #[default]
    Still,
    /// Offset increased.
    Positive,
}

impl ScrollDirection {
    /// Direction of `current - previous`.
    pub fn from_delta(delta: f32) -> Self {
        if delta > 0.0 {
            Self::Positive
        } else if delta < 0.0 {
            Self::Negative
        } else {
            Self::Still
        }
    }

    /// -1, 0 or +1.
    pub fn sign(self) -> f32 {
        match self {
            Self::Negative => -1.0,
            Self::Still => 0.0,
            Self::Positive => 1.0,
        }
    }
}

/// Flag that flips from unset to set once and stays set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OneShotLatch(bool);

impl OneShotLatch {
    /// Set the latch. Returns `true` only on the call that set it.
    pub fn trip(&mut self) -> bool {
        !std::mem::replace(&mut self.0, true)
    }

    /// Whether the latch has been set.
    pub fn is_set(self) -> bool {
        self.0
    }
}

/// Position, rotation and their velocities for one model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    /// Root translation.
    pub position: Vec3,
    /// Root rotation, Euler XYZ radians.
    pub rotation: Vec3,
    /// Scroll-driven velocity along Y.
    pub positional_velocity: DampedScalar,
    /// Pointer-driven spin per axis.
    pub rotational_velocity: Velocity3,
    /// Sign of the last scroll movement.
    pub scroll_direction: ScrollDirection,
    /// Whether one-shot setup has run.
    pub setup: OneShotLatch,
}

impl KinematicState {
    /// State at rest with the given damping.
    pub fn new(damping: &DampingSet) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            positional_velocity: DampedScalar::new(damping.positional_velocity),
            rotational_velocity: Velocity3::new(damping.rotational_velocity),
            scroll_direction: ScrollDirection::Still,
            setup: OneShotLatch::default(),
        }
    }

    /// Whether one-shot setup has run.
    pub fn is_setup_complete(&self) -> bool {
        self.setup.is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_trips_once() {
        let mut latch = OneShotLatch::default();
        assert!(!latch.is_set());
        assert!(latch.trip());
        assert!(!latch.trip());
        assert!(latch.is_set());
    }

    #[test]
    fn direction_from_delta() {
        assert_eq!(ScrollDirection::from_delta(-20.0), ScrollDirection::Negative);
        assert_eq!(ScrollDirection::from_delta(0.0), ScrollDirection::Still);
        assert_eq!(ScrollDirection::from_delta(3.0).sign(), 1.0);
    }
}
