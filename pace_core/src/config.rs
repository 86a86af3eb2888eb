//! Runtime configuration for the pace controller.
//!
//! These knobs are distinct from the host-persisted preferences in
//! `pace_config`: preferences arrive as change events at runtime, while
//! this struct fixes the controller's policy constants at build time.

/// Controller policy constants.
#[derive(Debug, Clone)]
pub struct ControllerCfg {
    /// Pace at or below which the user counts as standing rather than
    /// moving slowly; alerts are suppressed at or below it (steps/s).
    pub standing_threshold: f32,
    /// Samples older than this on arrival are ignored for alerting (ms).
    pub max_delivery_delay_ms: i64,
    /// Delay before the first scheduled wakeup after activation (ms).
    pub wakeup_start_delay_ms: i64,
    /// Period of the wakeup schedule keeping the host alive (ms).
    pub wakeup_period_ms: i64,
}

impl Default for ControllerCfg {
    fn default() -> Self {
        Self {
            standing_threshold: 1.0,
            max_delivery_delay_ms: 2_000,
            wakeup_start_delay_ms: 30_000,
            wakeup_period_ms: 60_000,
        }
    }
}
