use crate::error::MemError;

/// Why the sampler loop ended.
#[derive(Debug)]
pub enum StopReason {
    /// The monitored process exited while it was being sampled.
    ProcessExited { pid: u32 },
    /// Shutdown was requested (interrupt signal or token cancelled).
    Cancelled,
    /// Sampling failed for a reason other than the process going away.
    Failed(MemError),
}

impl StopReason {
    /// `true` when the stop should be reported as an error to the user.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_failed_is_a_failure() {
        assert!(!StopReason::ProcessExited { pid: 7 }.is_failure());
        assert!(!StopReason::Cancelled.is_failure());
        assert!(StopReason::Failed(MemError::Sampler("boom".into())).is_failure());
    }
}
