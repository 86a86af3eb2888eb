//! Serialized event delivery for multi-threaded hosts.
//!
//! The controller itself holds no locking and expects serial delivery.
//! `EventPump` owns the controller on a dedicated thread and applies
//! events strictly in arrival order, so sensor and preference callbacks
//! may come from different host threads.
//!
//! Safety: the pump spawns exactly one thread that drains the channel
//! and exits once every sender is gone; `Drop` closes the pump's own
//! sender and joins, so queued events are still applied before shutdown.

use crossbeam_channel as xch;

use pace_config::PrefChange;
use pace_traits::Host;

use crate::controller::PaceController;

/// An inbound controller event from any host thread.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Sample { timestamp_ns: i64, count: f32 },
    Pref(PrefChange),
}

pub struct EventPump {
    tx: Option<xch::Sender<Event>>,
    join_handle: Option<std::thread::JoinHandle<()>>,
}

impl EventPump {
    /// Move the controller onto its own delivery thread. `capacity`
    /// bounds the in-flight event queue; senders block when it is full.
    pub fn spawn<H: Host + Send + 'static>(
        mut controller: PaceController<H>,
        capacity: usize,
    ) -> Self {
        let (tx, rx) = xch::bounded::<Event>(capacity.max(1));

        let join_handle = std::thread::spawn(move || {
            for event in rx {
                match event {
                    Event::Sample { timestamp_ns, count } => {
                        controller.on_sample(Some(timestamp_ns), Some(count));
                    }
                    Event::Pref(change) => controller.on_pref_changed(change),
                }
            }
            tracing::trace!("event pump thread exiting cleanly");
        });

        Self {
            tx: Some(tx),
            join_handle: Some(join_handle),
        }
    }

    /// A sender for host callbacks. Drop all clones before dropping the
    /// pump, or `Drop` will wait for them.
    pub fn sender(&self) -> xch::Sender<Event> {
        // tx is only None during Drop.
        match &self.tx {
            Some(tx) => tx.clone(),
            None => unreachable!("sender() called after drop began"),
        }
    }
}

impl Drop for EventPump {
    fn drop(&mut self) {
        // Closing our sender ends the delivery loop after the queue drains.
        drop(self.tx.take());
        if let Some(handle) = self.join_handle.take() {
            match handle.join() {
                Ok(()) => tracing::trace!("event pump thread joined"),
                Err(e) => tracing::warn!(?e, "event pump thread panicked during shutdown"),
            }
        }
    }
}
