//! Builder for [`PaceController`].

use std::sync::Arc;

use pace_config::Prefs;
use pace_traits::{Clock, Host, SystemClock};

use crate::alert::AlertDebouncer;
use crate::best::BestPaceTracker;
use crate::config::ControllerCfg;
use crate::controller::PaceController;
use crate::error::{BuildError, Result};
use crate::window::SampleWindow;

pub struct PaceControllerBuilder<H> {
    host: Option<H>,
    cfg: ControllerCfg,
    clock: Option<Arc<dyn Clock + Send + Sync>>,
    prefs: Option<Prefs>,
}

impl<H: Host> Default for PaceControllerBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Host> PaceControllerBuilder<H> {
    pub fn new() -> Self {
        Self {
            host: None,
            cfg: ControllerCfg::default(),
            clock: None,
            prefs: None,
        }
    }

    pub fn with_host(mut self, host: H) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_cfg(mut self, cfg: ControllerCfg) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn with_clock<C: Clock + Send + Sync + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Seed the controller from a stored preference snapshot. The seed
    /// is applied during `build()` as ordinary preference changes, so
    /// the initial Idle/Active state is entirely host-driven.
    pub fn with_prefs(mut self, prefs: Prefs) -> Self {
        self.prefs = Some(prefs);
        self
    }

    pub fn build(self) -> Result<PaceController<H>> {
        let host = self
            .host
            .ok_or_else(|| eyre::Report::new(BuildError::MissingHost))?;
        if self.cfg.max_delivery_delay_ms <= 0 {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "max_delivery_delay_ms must be positive",
            )));
        }
        if self.cfg.wakeup_period_ms <= 0 {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "wakeup_period_ms must be positive",
            )));
        }
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock::new()) as Arc<dyn Clock + Send + Sync>);
        let start_offset_ms = clock.sensor_offset_ms();

        let mut controller = PaceController {
            host,
            clock,
            cfg: self.cfg,
            listening: false,
            min_pace: 0.0,
            window: SampleWindow::new(),
            best: BestPaceTracker::new(0.0),
            debouncer: AlertDebouncer::new(),
            start_offset_ms,
            last_pace: None,
        };
        if let Some(prefs) = self.prefs {
            for change in prefs.seed_changes() {
                controller.on_pref_changed(change);
            }
        }
        Ok(controller)
    }
}
