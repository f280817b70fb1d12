//! memgraph: live terminal chart of a process's memory footprint.
//!
//! Run with:  `memgraph <PID> [-i SECS]`  (`RUST_LOG=debug` for more logging)

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use memgraph_core::{MemError, StopReason};
use memgraph_terminal::RunOptions;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    tracing::info!("memgraph v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.clone().unwrap_or_else(memgraph_config::default_path);
    let config = memgraph_config::load(&config_path)?;
    let interval = memgraph_config::validate_interval(
        cli.interval.unwrap_or(config.sampler.interval_secs),
    )?;

    let options = RunOptions {
        pid: cli.pid,
        interval,
        config,
    };

    match memgraph_terminal::run(options) {
        Ok(StopReason::ProcessExited { pid }) => {
            println!("Process {pid} no longer exists.");
            Ok(ExitCode::SUCCESS)
        }
        Ok(StopReason::Cancelled) => Ok(ExitCode::SUCCESS),
        Ok(StopReason::Failed(e)) => {
            eprintln!("Error: {e}");
            Ok(ExitCode::FAILURE)
        }
        Err(MemError::ProcessNotFound { pid }) => {
            eprintln!("Error: Process {pid} not found");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

/// Structured logging. RUST_LOG controls verbosity (default: warn, since
/// the chart owns the terminal).
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create log file '{}'", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
