use memgraph_config::MemoryMetric;
use sysinfo::Process;

const MIB: f64 = (1u64 << 20) as f64;

/// Convert a byte count to megabytes (MiB).
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / MIB
}

/// Read the configured memory figure from a refreshed process entry, in bytes.
pub fn metric_bytes(process: &Process, metric: MemoryMetric) -> u64 {
    match metric {
        MemoryMetric::Virtual  => process.virtual_memory(),
        MemoryMetric::Resident => process.memory(),
    }
}
