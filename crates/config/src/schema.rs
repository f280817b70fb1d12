use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `memgraph.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemgraphConfig {
    /// Sampling settings.
    pub sampler: SamplerConfig,
    /// Chart appearance.
    pub chart: ChartConfig,
}

/// How and how often the target process is sampled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Seconds between samples. Must be positive.
    pub interval_secs: f64,
    /// Which memory figure to chart.
    pub metric: MemoryMetric,
    /// Maximum number of samples kept; `0` keeps everything.
    pub history_limit: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval_secs: 1.0,
            metric:        MemoryMetric::Virtual,
            history_limit: 0,
        }
    }
}

/// Memory figure reported for the target process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemoryMetric {
    /// Virtual memory size (VMS).
    #[default]
    Virtual,
    /// Resident set size (RSS).
    Resident,
}

/// Chart appearance settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Glyph set used for gridlines and the plotted line.
    pub style: GlyphStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    /// Box-drawing characters and a middle-dot grid.
    #[default]
    Unicode,
    /// Plain 7-bit ASCII for terminals without box-drawing fonts.
    Ascii,
}
