//! Sliding sample window and instantaneous pace derivation.

use std::collections::VecDeque;

use crate::util::NANOS_PER_SEC;

/// Maximum number of samples the window retains.
pub const WINDOW_LEN: usize = 3;

/// One cumulative step-count reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Sensor timestamp in nanoseconds on the boot-relative clock.
    pub timestamp_ns: i64,
    /// Cumulative step count since boot (or sensor reset).
    pub count: f32,
}

/// Fixed-capacity FIFO of the most recent samples.
///
/// Pace is derived from the oldest and newest entries after each push,
/// so a single reading yields 0 and the estimate sharpens as the window
/// fills. Timestamps are expected non-decreasing in arrival order;
/// equal oldest/newest timestamps yield a defined pace of 0.
#[derive(Debug, Default)]
pub struct SampleWindow {
    samples: VecDeque<Sample>,
}

impl SampleWindow {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(WINDOW_LEN + 1),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest retained sample, if any.
    pub fn oldest(&self) -> Option<Sample> {
        self.samples.front().copied()
    }

    /// Append a sample, evict beyond capacity, and return the pace in
    /// steps/second spanned by the current window.
    pub fn push(&mut self, timestamp_ns: i64, count: f32) -> f32 {
        self.samples.push_back(Sample {
            timestamp_ns,
            count,
        });
        while self.samples.len() > WINDOW_LEN {
            self.samples.pop_front();
        }
        let (Some(first), Some(last)) = (self.samples.front(), self.samples.back()) else {
            return 0.0;
        };
        let dt_ns = first.timestamp_ns - last.timestamp_ns;
        if dt_ns == 0 {
            return 0.0;
        }
        let dc = f64::from(first.count) - f64::from(last.count);
        (dc * NANOS_PER_SEC / dt_ns as f64) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_push_yields_zero_pace() {
        let mut w = SampleWindow::new();
        assert_eq!(w.push(5_000_000_000, 42.0), 0.0);
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn fourth_push_evicts_oldest() {
        let mut w = SampleWindow::new();
        for i in 0..4i64 {
            w.push(i * 1_000_000_000, i as f32);
        }
        assert_eq!(w.len(), WINDOW_LEN);
        assert_eq!(
            w.oldest().map(|s| s.timestamp_ns),
            Some(1_000_000_000),
            "oldest entry must be the second push after one eviction"
        );
    }

    #[test]
    fn pace_spans_oldest_to_newest() {
        let mut w = SampleWindow::new();
        w.push(0, 0.0);
        w.push(1_000_000_000, 1.0);
        let pace = w.push(2_000_000_000, 4.0);
        // (0 - 4) * 1e9 / (0 - 2e9) = 2.0 steps/sec
        assert!((pace - 2.0).abs() < 1e-6);
    }

    #[test]
    fn equal_timestamps_define_zero_pace() {
        let mut w = SampleWindow::new();
        w.push(1_000, 1.0);
        let pace = w.push(1_000, 9.0);
        assert_eq!(pace, 0.0);
    }
}
