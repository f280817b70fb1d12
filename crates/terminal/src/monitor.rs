use memgraph_core::{History, MemError, Sample, Sampler, Screen, StopReason};
use memgraph_renderer::ChartRenderer;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Shortest accepted tick; tokio rejects a zero interval period.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Consecutive failed frame commits tolerated before the output is
/// considered gone.
const MAX_COMMIT_FAILURES: u32 = 3;

/// Fixed-interval sampling loop: sample, append, redraw, wait.
///
/// Owns the [`History`]; the renderer only ever sees it by reference.
pub struct Monitor<S, W> {
    sampler:  S,
    screen:   W,
    renderer: ChartRenderer,
    history:  History,
    interval: Duration,
}

impl<S: Sampler, W: Screen> Monitor<S, W> {
    pub fn new(
        sampler: S,
        screen: W,
        renderer: ChartRenderer,
        history: History,
        interval: Duration,
    ) -> Self {
        Self { sampler, screen, renderer, history, interval: interval.max(MIN_INTERVAL) }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn screen(&self) -> &W {
        &self.screen
    }

    /// Run until the process exits, sampling fails, or `cancel` fires.
    ///
    /// Cancellation is honoured between ticks only; a sample and its frame
    /// always complete together.
    pub async fn run(&mut self, cancel: &CancellationToken) -> StopReason {
        let start = Instant::now();
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut commit_failures = 0;

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {}
                _ = ticker.tick() => {}
            }
            if cancel.is_cancelled() {
                info!(samples = self.history.len(), "monitoring cancelled");
                return StopReason::Cancelled;
            }

            let value_mb = match self.sampler.current_reading() {
                Ok(v) => v,
                Err(MemError::ProcessNotFound { pid }) => {
                    info!(pid, "monitored process exited");
                    return StopReason::ProcessExited { pid };
                }
                Err(e) => {
                    warn!("sampling failed: {e}");
                    return StopReason::Failed(e);
                }
            };

            let elapsed = start.elapsed().as_secs_f64();
            debug!(elapsed, value_mb, "sample");
            if !self.history.push(Sample::new(elapsed, value_mb)) {
                warn!(elapsed, value_mb, "sample rejected; frame skipped");
                continue;
            }

            match self.renderer.draw(&self.history, &mut self.screen) {
                Ok(()) => commit_failures = 0,
                Err(e) => {
                    commit_failures += 1;
                    warn!(attempt = commit_failures, "frame commit failed: {e}");
                    if commit_failures >= MAX_COMMIT_FAILURES {
                        return StopReason::Failed(e);
                    }
                }
            }
        }
    }
}
