use thiserror::Error;

/// Top-level error type shared by every memgraph crate.
#[derive(Debug, Error)]
pub enum MemError {
    #[error("process {pid} no longer exists")]
    ProcessNotFound { pid: u32 },

    #[error("access denied while reading process {pid}")]
    AccessDenied { pid: u32 },

    #[error("sampler error: {0}")]
    Sampler(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = MemError> = std::result::Result<T, E>;

/// A grid write that landed (at least partly) outside the addressable area.
///
/// Renderers swallow this per write; it never aborts a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("write at row {row}, col {col} is outside the grid")]
pub struct WriteOverflow {
    pub row: usize,
    pub col: usize,
}
