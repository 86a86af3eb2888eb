//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "pacekeeper", version, about = "PaceKeeper replay host")]
pub struct Cli {
    /// Log as JSON lines instead of pretty
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Also write JSON logs to this file
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a recorded step-sensor trace against a preference snapshot
    Replay {
        /// Preference snapshot TOML
        #[arg(long, value_name = "FILE")]
        prefs: PathBuf,

        /// Trace file: one `timestamp_ns step_count` pair per line
        #[arg(long, value_name = "FILE")]
        trace: PathBuf,
    },
    /// Validate a preference snapshot without replaying anything
    Check {
        /// Preference snapshot TOML
        #[arg(long, value_name = "FILE")]
        prefs: PathBuf,
    },
}
