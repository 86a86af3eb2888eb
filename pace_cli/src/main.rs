//! PaceKeeper replay host: drives the pace controller from recorded
//! sensor traces and preference snapshots.

mod cli;
mod replay;

use clap::Parser;
use eyre::{Result, WrapErr};

use crate::cli::{Cli, Commands, FILE_GUARD};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(&cli)?;

    match cli.cmd {
        Commands::Replay { prefs, trace } => {
            let summary = replay::run_replay(&prefs, &trace)?;
            println!(
                "{}",
                serde_json::json!({
                    "samples": summary.samples,
                    "alerts": summary.alerts,
                    "persists": summary.persists,
                    "best_pace": summary.best_pace,
                })
            );
            Ok(())
        }
        Commands::Check { prefs } => {
            let text = std::fs::read_to_string(&prefs)
                .wrap_err_with(|| format!("reading preference snapshot {}", prefs.display()))?;
            let snapshot =
                pace_config::load_toml(&text).wrap_err("parsing preference snapshot")?;
            snapshot.validate()?;
            println!("ok");
            Ok(())
        }
    }
}

/// Console logs go to stderr so the stdout summary stays machine-readable.
fn init_tracing(cli: &Cli) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &cli.log_file {
        let file = std::fs::File::create(path)
            .wrap_err_with(|| format!("creating log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let _ = FILE_GUARD.set(guard);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_writer(writer)
            .init();
    } else if cli.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
