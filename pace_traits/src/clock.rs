use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Dual-reference clock abstraction for the pace controller.
///
/// - wall_ms(): wall-clock milliseconds since the Unix epoch
/// - boot_ms(): milliseconds on the boot-relative clock the step sensor
///   stamps its events with
/// - sensor_offset_ms(): fixed offset between the two, captured once at
///   controller construction to translate sensor timestamps into wall time
pub trait Clock {
    fn wall_ms(&self) -> i64;
    fn boot_ms(&self) -> i64;

    /// Offset between wall time and the sensor's boot-relative clock.
    fn sensor_offset_ms(&self) -> i64 {
        self.wall_ms() - self.boot_ms()
    }
}

/// Default real clock. Wall time comes from `SystemTime`; the
/// boot-relative reference is anchored at process start, which matches
/// sensor sources that stamp events relative to host startup.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn wall_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }

    fn boot_ms(&self) -> i64 {
        self.origin.elapsed().as_millis() as i64
    }
}
