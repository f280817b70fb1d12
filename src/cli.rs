use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "memgraph",
    version,
    about = "Real-time memory usage chart for a running process",
    long_about = None
)]
pub struct Cli {
    /// Process ID to monitor
    pub pid: u32,

    /// Update interval in seconds (default: 1.0, or the config file value)
    #[arg(short, long)]
    pub interval: Option<f64>,

    /// Config file (default: $XDG_CONFIG_HOME/memgraph/memgraph.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
