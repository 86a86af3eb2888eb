//! Alert cooldown policy and buzz pattern computation.

use crate::util::MILLIS_PER_SEC;

/// Length of one vibration pulse in milliseconds.
pub const BUZZ_PULSE_MS: u64 = 200;
/// Step periods spanned by one buzz cycle.
const BUZZ_CYCLE_STEPS: i64 = 6;
/// Buzz-cycle-equivalents of silence enforced between alerts.
const COOLDOWN_CYCLES: i64 = 10;

/// Debounces alert firing so a persistently slow pace produces one
/// alert per cooldown window instead of one per sample.
///
/// All methods taking `min_pace` require `min_pace > 0`; the controller
/// treats a non-positive minimum as "alerting disabled" and never gets
/// here.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertDebouncer {
    last_fired_ms: i64,
}

impl AlertDebouncer {
    pub fn new() -> Self {
        Self { last_fired_ms: 0 }
    }

    /// One step period at the configured minimum pace, truncated to
    /// whole milliseconds.
    fn step_period_ms(min_pace: f32) -> i64 {
        (MILLIS_PER_SEC / f64::from(min_pace)) as i64
    }

    /// Minimum silence between two fired alerts: ten buzz-cycle
    /// equivalents at the configured minimum pace.
    ///
    /// Saturates for near-zero minimums, where a single step period
    /// already exceeds the representable range; a saturated cooldown
    /// never elapses.
    pub fn cooldown_ms(min_pace: f32) -> i64 {
        Self::step_period_ms(min_pace)
            .saturating_mul(BUZZ_CYCLE_STEPS)
            .saturating_mul(COOLDOWN_CYCLES)
    }

    /// True once the cooldown since the last fired alert has elapsed.
    pub fn should_alert(&self, now_ms: i64, min_pace: f32) -> bool {
        now_ms >= self.last_fired_ms.saturating_add(Self::cooldown_ms(min_pace))
    }

    /// Record a fired alert. Must be called exactly once per alert,
    /// before the actuator command goes out.
    pub fn record_fired(&mut self, now_ms: i64) {
        self.last_fired_ms = now_ms;
    }

    /// Three pulses separated by one step period of rest:
    /// `[initial_delay, pulse, gap, pulse, gap, pulse]` in milliseconds.
    pub fn buzz_pattern(min_pace: f32) -> [u64; 6] {
        let gap = Self::step_period_ms(min_pace) as u64 + BUZZ_PULSE_MS;
        [
            0,
            BUZZ_PULSE_MS,
            gap,
            BUZZ_PULSE_MS,
            gap,
            BUZZ_PULSE_MS,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_is_sixty_step_periods() {
        // min_pace 2.0 -> step period 500 ms -> 30 s cooldown
        assert_eq!(AlertDebouncer::cooldown_ms(2.0), 30_000);
        // step period truncates: 1000/3 -> 333 ms -> 19 980 ms
        assert_eq!(AlertDebouncer::cooldown_ms(3.0), 19_980);
    }

    #[test]
    fn pattern_for_two_steps_per_second() {
        assert_eq!(
            AlertDebouncer::buzz_pattern(2.0),
            [0, 200, 700, 200, 700, 200]
        );
    }

    #[test]
    fn boundary_is_inclusive_at_cooldown_expiry() {
        let mut d = AlertDebouncer::new();
        d.record_fired(1_000);
        let cooldown = AlertDebouncer::cooldown_ms(2.0);
        assert!(!d.should_alert(1_000 + cooldown - 1, 2.0));
        assert!(d.should_alert(1_000 + cooldown, 2.0));
        assert!(d.should_alert(1_000 + cooldown + 1, 2.0));
    }
}
