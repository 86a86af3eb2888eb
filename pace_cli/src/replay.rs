//! Trace replay: feeds a recorded sensor trace through the controller.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use eyre::{Result, WrapErr};
use pace_core::PaceController;
use pace_traits::{Clock, Host};

/// Outcome of one replay run.
#[derive(Debug)]
pub struct Summary {
    pub samples: usize,
    pub alerts: usize,
    pub persists: usize,
    pub best_pace: f32,
}

/// Clock that follows the trace: the boot-relative face jumps to each
/// sample's timestamp before delivery, so replayed samples arrive with
/// zero delivery delay; wall time tracks from the real epoch base.
#[derive(Clone)]
struct TraceClock {
    wall_base: i64,
    boot_ms: Arc<AtomicI64>,
}

impl TraceClock {
    fn new() -> Self {
        let wall_base = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        Self {
            wall_base,
            boot_ms: Arc::new(AtomicI64::new(0)),
        }
    }

    fn set_boot_ms(&self, ms: i64) {
        self.boot_ms.store(ms, Ordering::Relaxed);
    }
}

impl Clock for TraceClock {
    fn wall_ms(&self) -> i64 {
        self.wall_base + self.boot_ms.load(Ordering::Relaxed)
    }

    fn boot_ms(&self) -> i64 {
        self.boot_ms.load(Ordering::Relaxed)
    }
}

/// Host that logs every command and counts what the summary reports.
#[derive(Clone, Default)]
struct ReplayHost {
    alerts: Arc<AtomicUsize>,
    persists: Arc<AtomicUsize>,
}

impl Host for ReplayHost {
    fn schedule_wakeups(
        &mut self,
        start_delay_ms: i64,
        period_ms: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!(start_delay_ms, period_ms, "schedule wakeups");
        Ok(())
    }

    fn cancel_wakeups(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("cancel wakeups");
        Ok(())
    }

    fn persist_best_pace(
        &mut self,
        pace: f32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!(stored = %pace_config::format_pace(pace), "persist best pace");
        self.persists.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn vibrate(
        &mut self,
        pattern_ms: &[u64],
        repeat_index: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!(?pattern_ms, repeat_index, "vibrate");
        self.alerts.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn ring(
        &mut self,
        repeat: i32,
        interval_ms: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!(repeat, interval_ms, "ring");
        Ok(())
    }
}

pub fn run_replay(prefs_path: &Path, trace_path: &Path) -> Result<Summary> {
    let text = std::fs::read_to_string(prefs_path)
        .wrap_err_with(|| format!("reading preference snapshot {}", prefs_path.display()))?;
    let prefs = pace_config::load_toml(&text).wrap_err("parsing preference snapshot")?;
    if let Err(e) = prefs.validate() {
        tracing::warn!(error = %e, "snapshot has malformed values; controller will ignore them");
    }

    let trace = std::fs::read_to_string(trace_path)
        .wrap_err_with(|| format!("reading trace {}", trace_path.display()))?;

    let clock = TraceClock::new();
    let host = ReplayHost::default();
    let mut controller = PaceController::builder()
        .with_host(host.clone())
        .with_clock(clock.clone())
        .with_prefs(prefs)
        .build()?;

    let mut samples = 0usize;
    for (lineno, line) in trace.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((timestamp_ns, count)) = parse_line(line) else {
            tracing::warn!(lineno = lineno + 1, line, "skipping malformed trace line");
            continue;
        };
        clock.set_boot_ms(timestamp_ns / 1_000_000);
        controller.on_sample(Some(timestamp_ns), Some(count));
        samples += 1;
    }

    Ok(Summary {
        samples,
        alerts: host.alerts.load(Ordering::Relaxed),
        persists: host.persists.load(Ordering::Relaxed),
        best_pace: controller.best_pace(),
    })
}

/// One trace record: `timestamp_ns step_count`, whitespace separated.
fn parse_line(line: &str) -> Option<(i64, f32)> {
    let mut it = line.split_whitespace();
    let timestamp_ns = it.next()?.parse().ok()?;
    let count = it.next()?.parse().ok()?;
    if it.next().is_some() {
        return None;
    }
    Some((timestamp_ns, count))
}

#[cfg(test)]
mod tests {
    use super::parse_line;

    #[test]
    fn parses_timestamp_and_count() {
        assert_eq!(parse_line("2000000000 3"), Some((2_000_000_000, 3.0)));
        assert_eq!(parse_line("0   1.5"), Some((0, 1.5)));
    }

    #[test]
    fn rejects_malformed_records() {
        assert_eq!(parse_line("2000000000"), None);
        assert_eq!(parse_line("x y"), None);
        assert_eq!(parse_line("1 2 3"), None);
    }
}
