/// Remembers the last scroll offset and reports movement against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScrollTracker {
    baseline: f32,
}

impl ScrollTracker {
    pub(crate) fn new(initial_offset: f32) -> Self {
        Self {
            baseline: initial_offset,
        }
    }

    /// Signed delta since the previous offset; the new offset becomes the
    /// baseline.
    pub(crate) fn update(&mut self, offset: f32) -> f32 {
        let delta = offset - self.baseline;
        self.baseline = offset;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_delta_against_previous_offset() {
        let mut tracker = ScrollTracker::new(100.0);
        assert_eq!(tracker.update(80.0), -20.0);
        assert_eq!(tracker.update(80.0), 0.0);
        assert_eq!(tracker.update(130.0), 50.0);
    }
}
