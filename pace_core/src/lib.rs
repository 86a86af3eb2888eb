#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core pace-keeping logic (host-agnostic).
//!
//! This crate provides the platform-independent pace controller. All
//! host interactions (persistence, wakeup scheduling, vibration/ring)
//! go through the `pace_traits::Host` and `pace_traits::Clock` traits.
//!
//! ## Architecture
//!
//! - **Window**: sliding 3-sample buffer deriving steps/second (`window` module)
//! - **Best pace**: strict-improvement tracking with persist signaling (`best` module)
//! - **Debounce**: alert cooldown and buzz pattern (`alert` module)
//! - **Controller**: preference-driven state machine tying it together (`controller` module)
//! - **Runner**: serialized event delivery for multi-threaded hosts (`runner` module)
//!
//! The controller is synchronous and lock-free; commands it emits are
//! fire-and-forget, and downstream failures are logged, never surfaced.

pub mod alert;
pub mod best;
pub mod builder;
pub mod config;
pub mod controller;
pub mod error;
pub mod mocks;
pub mod runner;
pub mod util;
pub mod window;

pub use alert::AlertDebouncer;
pub use best::BestPaceTracker;
pub use builder::PaceControllerBuilder;
pub use config::ControllerCfg;
pub use controller::PaceController;
pub use error::{BuildError, Result};
pub use window::{Sample, SampleWindow, WINDOW_LEN};

// Preference types flow through the controller API; re-export for hosts.
pub use pace_config::{PrefChange, Prefs};
