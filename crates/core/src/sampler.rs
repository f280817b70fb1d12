use crate::error::Result;

/// Source of memory readings for a single target process.
///
/// Implementations return [`MemError::ProcessNotFound`](crate::MemError::ProcessNotFound)
/// once the target has exited; any other error ends monitoring as a failure.
pub trait Sampler {
    /// PID of the monitored process.
    fn pid(&self) -> u32;

    /// Human-readable process name, used in the chart title.
    fn process_name(&self) -> &str;

    /// Current memory footprint in megabytes.
    fn current_reading(&mut self) -> Result<f64>;
}
