pub mod error;
pub mod history;
pub mod sampler;
pub mod screen;
pub mod stop;

pub use error::{MemError, Result, WriteOverflow};
pub use history::{History, Sample};
pub use sampler::Sampler;
pub use screen::{GridDimensions, Screen};
pub use stop::StopReason;
