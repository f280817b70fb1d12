//! Terminal front end for memgraph.
//!
//! Wires the pieces together for a live session:
//! - `ProcessSampler` reading the target's memory
//! - `TerminalScreen` on the alternate screen
//! - the fixed-interval [`Monitor`] loop
//! - interrupt/terminate signals feeding a cancellation token

pub mod monitor;
pub mod screen;

pub use monitor::Monitor;
pub use screen::TerminalScreen;

use memgraph_config::MemgraphConfig;
use memgraph_core::{History, MemError, Result, Sampler, StopReason};
use memgraph_renderer::ChartRenderer;
use memgraph_system::ProcessSampler;
use memgraph_theme::Theme;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Everything needed to start a monitoring session.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub pid:      u32,
    pub interval: Duration,
    pub config:   MemgraphConfig,
}

/// Monitor `options.pid` until it exits or the user interrupts.
///
/// Fails with [`MemError::ProcessNotFound`] before touching the terminal if
/// the process is not running. The terminal is restored before returning.
pub fn run(options: RunOptions) -> Result<StopReason> {
    let sampler = ProcessSampler::new(options.pid, options.config.sampler.metric)?;

    // Single logical actor: sampling and drawing never run concurrently.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| MemError::Terminal(format!("cannot start runtime: {e}")))?;

    runtime.block_on(async move {
        let cancel = CancellationToken::new();
        spawn_signal_listener(cancel.clone());

        let renderer = ChartRenderer::for_process(
            sampler.pid(),
            sampler.process_name(),
            Theme::from_config(&options.config.chart),
        );
        let history = History::with_capacity(options.config.sampler.history_limit);
        let screen = TerminalScreen::enter()?;

        info!(
            pid = options.pid,
            interval = ?options.interval,
            "monitoring started"
        );

        let mut monitor = Monitor::new(sampler, screen, renderer, history, options.interval);
        let reason = monitor.run(&cancel).await;
        // Dropping the monitor drops the screen and restores the terminal.
        drop(monitor);
        Ok::<_, MemError>(reason)
    })
}

/// Cancel `token` on Ctrl-C (and SIGTERM on Unix).
fn spawn_signal_listener(token: CancellationToken) {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            match signal(SignalKind::terminate()) {
                Ok(mut term) => {
                    tokio::select! {
                        res = tokio::signal::ctrl_c() => {
                            if let Err(e) = res {
                                warn!("cannot listen for Ctrl-C: {e}");
                                return;
                            }
                        }
                        _ = term.recv() => {}
                    }
                }
                Err(e) => {
                    warn!("cannot listen for SIGTERM: {e}");
                    if tokio::signal::ctrl_c().await.is_err() {
                        return;
                    }
                }
            }
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("cannot listen for Ctrl-C: {e}");
                return;
            }
        }

        info!("shutdown requested");
        token.cancel();
    });
}
