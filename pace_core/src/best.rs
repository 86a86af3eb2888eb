//! Best-pace tracking with persistence signaling.

/// Holds the best pace observed so far (steps/second).
///
/// `observe` signals strict improvements only, so equal values are not
/// re-persisted. The value never decreases except via `reseed`, which
/// mirrors an authoritative reload from external storage (e.g. a device
/// restore writing a smaller value back).
#[derive(Debug, Clone, Copy, Default)]
pub struct BestPaceTracker {
    best: f32,
}

impl BestPaceTracker {
    pub fn new(seed: f32) -> Self {
        Self { best: seed }
    }

    pub fn best(&self) -> f32 {
        self.best
    }

    /// Returns the new best when `candidate` strictly exceeds it; the
    /// caller must persist the returned value.
    pub fn observe(&mut self, candidate: f32) -> Option<f32> {
        if candidate > self.best {
            self.best = candidate;
            Some(candidate)
        } else {
            None
        }
    }

    /// Replace the best unconditionally from stored state.
    pub fn reseed(&mut self, value: f32) {
        self.best = value;
    }
}
