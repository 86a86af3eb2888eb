//! Test and helper mocks for pace_core.

use std::sync::{Arc, Mutex};

use pace_traits::Host;

/// Every command the controller can issue, captured for assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    ScheduleWakeups { start_delay_ms: i64, period_ms: i64 },
    CancelWakeups,
    PersistBestPace(f32),
    Vibrate { pattern_ms: Vec<u64>, repeat_index: i32 },
    Ring { repeat: i32, interval_ms: i32 },
}

/// Host spy that records every command; clones share one log, so tests
/// keep a handle after moving the host into the controller.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    log: Arc<Mutex<Vec<HostCommand>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<HostCommand> {
        self.log.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Drain the recorded commands, returning everything seen so far.
    pub fn take(&self) -> Vec<HostCommand> {
        self.log.lock().map(|mut g| g.drain(..).collect()).unwrap_or_default()
    }

    pub fn alerts_fired(&self) -> usize {
        self.log
            .lock()
            .map(|g| {
                g.iter()
                    .filter(|c| matches!(c, HostCommand::Vibrate { .. }))
                    .count()
            })
            .unwrap_or(0)
    }

    fn record(&self, cmd: HostCommand) {
        if let Ok(mut g) = self.log.lock() {
            g.push(cmd);
        }
    }
}

impl Host for RecordingHost {
    fn schedule_wakeups(
        &mut self,
        start_delay_ms: i64,
        period_ms: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.record(HostCommand::ScheduleWakeups {
            start_delay_ms,
            period_ms,
        });
        Ok(())
    }

    fn cancel_wakeups(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.record(HostCommand::CancelWakeups);
        Ok(())
    }

    fn persist_best_pace(
        &mut self,
        pace: f32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.record(HostCommand::PersistBestPace(pace));
        Ok(())
    }

    fn vibrate(
        &mut self,
        pattern_ms: &[u64],
        repeat_index: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.record(HostCommand::Vibrate {
            pattern_ms: pattern_ms.to_vec(),
            repeat_index,
        });
        Ok(())
    }

    fn ring(
        &mut self,
        repeat: i32,
        interval_ms: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.record(HostCommand::Ring {
            repeat,
            interval_ms,
        });
        Ok(())
    }
}

/// A host whose every command fails; the controller must log and carry on.
#[derive(Debug, Default)]
pub struct FailingHost;

impl Host for FailingHost {
    fn schedule_wakeups(
        &mut self,
        _start_delay_ms: i64,
        _period_ms: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("scheduler down")))
    }

    fn cancel_wakeups(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("scheduler down")))
    }

    fn persist_best_pace(
        &mut self,
        _pace: f32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("storage down")))
    }

    fn vibrate(
        &mut self,
        _pattern_ms: &[u64],
        _repeat_index: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("actuator down")))
    }

    fn ring(
        &mut self,
        _repeat: i32,
        _interval_ms: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("actuator down")))
    }
}
