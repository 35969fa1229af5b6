//! Scalar damping primitive shared by the positional and rotational
//! integrators.
//!
//! A damped channel holds a signed velocity that accumulates impulses and
//! decays multiplicatively once per frame, approaching zero exponentially
//! without ever being snapped to it.

use glam::Vec3;

use crate::error::VitrineError;

/// Per-step multiplicative decay, strictly inside `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampingFactor(f32);

impl DampingFactor {
    /// Validate a decay factor. `name` identifies it in the error.
    pub fn new(name: &'static str, value: f32) -> Result<Self, VitrineError> {
        // Written so NaN falls through to the error branch.
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(VitrineError::InvalidDamping { name, value })
        }
    }

    /// The raw factor.
    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    /// Apply one decay step to `value`.
    #[inline]
    pub fn apply(self, value: f32) -> f32 {
        value * self.0
    }
}

/// A single signed velocity channel with a fixed decay factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampedScalar {
    value: f32,
    decay: DampingFactor,
}

impl DampedScalar {
    /// A channel at rest.
    pub fn new(decay: DampingFactor) -> Self {
        Self { value: 0.0, decay }
    }

    /// Current velocity.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Decay factor applied by [`Self::decay`].
    pub fn factor(&self) -> DampingFactor {
        self.decay
    }

    /// Replace the velocity outright.
    pub fn set(&mut self, value: f32) {
        self.value = value;
    }

    /// Add a one-time change to the velocity.
    pub fn impulse(&mut self, delta: f32) {
        self.value += delta;
    }

    /// Advance one frame of exponential decay.
    pub fn decay(&mut self) {
        self.value = self.decay.apply(self.value);
    }
}

/// Three independent damped channels (x, y, z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity3 {
    /// X channel.
    pub x: DampedScalar,
    /// Y channel.
    pub y: DampedScalar,
    /// Z channel.
    pub z: DampedScalar,
}

impl Velocity3 {
    /// All three channels at rest, sharing one decay factor.
    pub fn new(decay: DampingFactor) -> Self {
        let channel = DampedScalar::new(decay);
        Self {
            x: channel,
            y: channel,
            z: channel,
        }
    }

    /// Current velocity as a vector.
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.x.value(), self.y.value(), self.z.value())
    }

    /// Add `delta` per axis.
    pub fn impulse(&mut self, delta: Vec3) {
        self.x.impulse(delta.x);
        self.y.impulse(delta.y);
        self.z.impulse(delta.z);
    }

    /// Decay every channel by one frame.
    pub fn decay(&mut self) {
        self.x.decay();
        self.y.decay();
        self.z.decay();
    }
}
