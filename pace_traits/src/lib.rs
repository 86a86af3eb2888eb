pub mod clock;

pub use clock::{Clock, SystemClock};

/// Host capabilities the pace controller calls into.
///
/// The host owns persistence, the wakeup scheduler, and the alert
/// actuators; the controller only issues fire-and-forget requests and
/// never inspects their outcome beyond logging a failure.
pub trait Host {
    /// (Re)arm the periodic wakeup schedule that keeps the host process
    /// alive for sensor delivery.
    fn schedule_wakeups(
        &mut self,
        start_delay_ms: i64,
        period_ms: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Tear down the wakeup schedule.
    fn cancel_wakeups(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Persist a newly observed best pace (steps/second).
    fn persist_best_pace(
        &mut self,
        pace: f32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Vibrate with the given on/off pattern in milliseconds.
    /// `repeat_index` of -1 plays the pattern once.
    fn vibrate(
        &mut self,
        pattern_ms: &[u64],
        repeat_index: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Audible companion to `vibrate`; fired together with it.
    fn ring(
        &mut self,
        repeat: i32,
        interval_ms: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
