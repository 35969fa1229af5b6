//! Scoped registrations with collaborators.
//!
//! Every timer, observer and listener a stage acquires is held as a
//! [`Subscription`]. Releasing it runs the collaborator's teardown exactly
//! once, whether triggered explicitly or by drop.

use std::fmt;

/// A live registration with an external collaborator.
pub struct Subscription {
    label: &'static str,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a teardown closure. `label` names the registration in logs.
    pub fn new(label: &'static str, release: impl FnOnce() + 'static) -> Self {
        Self {
            label,
            release: Some(Box::new(release)),
        }
    }

    /// A registration with nothing to tear down.
    pub fn detached(label: &'static str) -> Self {
        Self {
            label,
            release: None,
        }
    }

    /// Name given at acquisition.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether teardown has yet to run.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Run the teardown if it has not run yet. Returns `true` when this call
    /// performed the release.
    pub fn cancel(&mut self) -> bool {
        match self.release.take() {
            Some(release) => {
                log::debug!("releasing {}", self.label);
                release();
                true
            }
            None => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}
