pub mod memory;

use memgraph_config::MemoryMetric;
use memgraph_core::{MemError, Result, Sampler};
use sysinfo::{Pid, ProcessStatus, ProcessesToUpdate, System};

/// [`Sampler`] backed by `sysinfo`, reading one process's memory per call.
pub struct ProcessSampler {
    sys:    System,
    pid:    Pid,
    name:   String,
    metric: MemoryMetric,
}

impl std::fmt::Debug for ProcessSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessSampler")
            .field("pid", &self.pid)
            .field("name", &self.name)
            .field("metric", &self.metric)
            .finish()
    }
}

impl ProcessSampler {
    /// Attach to `pid`. Fails with [`MemError::ProcessNotFound`] if no such
    /// process is running right now.
    pub fn new(pid: u32, metric: MemoryMetric) -> Result<Self> {
        let mut sys = System::new();
        let sys_pid = Pid::from_u32(pid);
        refresh(&mut sys, sys_pid);

        let name = match sys.process(sys_pid) {
            Some(process) if process.status() != ProcessStatus::Zombie => {
                process.name().to_string_lossy().into_owned()
            }
            _ => return Err(missing(pid)),
        };

        tracing::info!(pid, %name, ?metric, "attached to process");

        Ok(Self { sys, pid: sys_pid, name, metric })
    }
}

impl Sampler for ProcessSampler {
    fn pid(&self) -> u32 {
        self.pid.as_u32()
    }

    fn process_name(&self) -> &str {
        &self.name
    }

    fn current_reading(&mut self) -> Result<f64> {
        refresh(&mut self.sys, self.pid);

        let process = self
            .sys
            .process(self.pid)
            .ok_or_else(|| missing(self.pid.as_u32()))?;

        // A zombie has released its address space; treat it as gone.
        if process.status() == ProcessStatus::Zombie {
            return Err(MemError::ProcessNotFound { pid: self.pid.as_u32() });
        }

        Ok(memory::bytes_to_mb(memory::metric_bytes(process, self.metric)))
    }
}

fn refresh(sys: &mut System, pid: Pid) {
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
}

/// The process table no longer lists `pid`. On Linux a surviving `/proc`
/// entry means it exists but could not be read.
fn missing(pid: u32) -> MemError {
    if cfg!(target_os = "linux") && std::path::Path::new("/proc").join(pid.to_string()).exists() {
        MemError::AccessDenied { pid }
    } else {
        MemError::ProcessNotFound { pid }
    }
}
