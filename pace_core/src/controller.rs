//! The pace-keeping controller.
//!
//! Receives preference changes and step-sensor samples from the host,
//! derives an instantaneous pace from a short sliding window, tracks
//! the best pace ever seen, and fires a debounced vibrate+ring alert
//! when the user moves persistently slower than the configured minimum.

use std::sync::Arc;

use pace_config::{PrefChange, parse_pace};
use pace_traits::{Clock, Host};

use crate::alert::AlertDebouncer;
use crate::best::BestPaceTracker;
use crate::config::ControllerCfg;
use crate::util::ns_to_ms;
use crate::window::SampleWindow;

/// Host-driven pace controller.
///
/// Single logical thread of control: the host delivers
/// `on_pref_changed` / `on_sample` serially. The controller holds no
/// locking of its own; multi-threaded hosts go through
/// `runner::EventPump` instead of calling in directly.
pub struct PaceController<H: Host> {
    pub(crate) host: H,
    pub(crate) clock: Arc<dyn Clock + Send + Sync>,
    pub(crate) cfg: ControllerCfg,

    pub(crate) listening: bool,
    pub(crate) min_pace: f32,
    pub(crate) window: SampleWindow,
    pub(crate) best: BestPaceTracker,
    pub(crate) debouncer: AlertDebouncer,
    /// Fixed offset between the sensor's boot-relative clock and wall
    /// time, captured once at construction.
    pub(crate) start_offset_ms: i64,
    pub(crate) last_pace: Option<f32>,
}

impl<H: Host> core::fmt::Debug for PaceController<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaceController")
            .field("listening", &self.listening)
            .field("min_pace", &self.min_pace)
            .field("best_pace", &self.best.best())
            .field("last_pace", &self.last_pace)
            .finish()
    }
}

impl<H: Host> PaceController<H> {
    pub fn builder() -> crate::builder::PaceControllerBuilder<H> {
        crate::builder::PaceControllerBuilder::new()
    }

    /// Telemetry: pace from the most recent sample, steps/second.
    pub fn last_pace(&self) -> Option<f32> {
        self.last_pace
    }

    /// Telemetry: best pace observed or reseeded so far.
    pub fn best_pace(&self) -> f32 {
        self.best.best()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Apply a single preference change from the host's key-value store.
    ///
    /// Malformed numeric text is ignored and the previous value kept.
    /// Every write of the active flag reconfigures the wakeup schedule,
    /// even when the value is unchanged; re-arming replaces any existing
    /// schedule on the host side.
    pub fn on_pref_changed(&mut self, change: PrefChange) {
        match change {
            PrefChange::Active(on) => {
                tracing::debug!(listening = on, "preference change: active");
                self.listening = on;
                if on {
                    if let Err(e) = self
                        .host
                        .schedule_wakeups(self.cfg.wakeup_start_delay_ms, self.cfg.wakeup_period_ms)
                    {
                        tracing::warn!(error = %e, "schedule_wakeups failed");
                    }
                } else if let Err(e) = self.host.cancel_wakeups() {
                    tracing::warn!(error = %e, "cancel_wakeups failed");
                }
            }
            PrefChange::MinStepFreq(text) => match parse_pace(&text) {
                Some(v) => {
                    tracing::debug!(min_pace = v, "preference change: min_step_freq");
                    self.min_pace = v;
                }
                None => {
                    tracing::debug!(value = %text, "ignoring malformed min_step_freq");
                }
            },
            PrefChange::BestPace(text) => match parse_pace(&text) {
                Some(v) => {
                    tracing::debug!(best_pace = v, "preference change: best_pace");
                    self.best.reseed(v);
                }
                None => {
                    tracing::debug!(value = %text, "ignoring malformed best_pace");
                }
            },
        }
    }

    /// Ingest one step-sensor reading.
    ///
    /// Absent fields make the event a no-op. Otherwise the sample goes
    /// through the window, the best-pace tracker, and the alert
    /// condition; zero or more host commands result.
    pub fn on_sample(&mut self, timestamp_ns: Option<i64>, count: Option<f32>) {
        let (Some(ts_ns), Some(count)) = (timestamp_ns, count) else {
            return;
        };
        let now_ms = self.clock.wall_ms();
        let delivery_delay_ms = now_ms - ns_to_ms(ts_ns) - self.start_offset_ms;

        let pace = self.window.push(ts_ns, count);
        self.last_pace = Some(pace);
        tracing::debug!(count, delivery_delay_ms, pace, "step sample");

        if let Some(best) = self.best.observe(pace) {
            if let Err(e) = self.host.persist_best_pace(best) {
                tracing::warn!(error = %e, "persist_best_pace failed");
            }
        }

        if self.should_fire(now_ms, delivery_delay_ms, pace) {
            self.fire_alert(now_ms);
        }
    }

    /// Alert condition: enabled, fresh delivery, moving slower than the
    /// minimum but faster than standing, and outside the cooldown.
    /// A non-positive minimum pace disables alerting entirely.
    fn should_fire(&self, now_ms: i64, delivery_delay_ms: i64, pace: f32) -> bool {
        self.listening
            && self.min_pace > 0.0
            && delivery_delay_ms < self.cfg.max_delivery_delay_ms
            && pace < self.min_pace
            && pace > self.cfg.standing_threshold
            && self.debouncer.should_alert(now_ms, self.min_pace)
    }

    fn fire_alert(&mut self, now_ms: i64) {
        // Record before emitting so a re-entrant sample cannot double-fire.
        self.debouncer.record_fired(now_ms);
        let pattern = AlertDebouncer::buzz_pattern(self.min_pace);
        tracing::info!(
            min_pace = self.min_pace,
            pace = self.last_pace,
            "pace below minimum, firing alert"
        );
        if let Err(e) = self.host.vibrate(&pattern, -1) {
            tracing::warn!(error = %e, "vibrate failed");
        }
        if let Err(e) = self.host.ring(0, 0) {
            tracing::warn!(error = %e, "ring failed");
        }
    }
}
