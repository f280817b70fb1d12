pub mod schema;

pub use schema::{ChartConfig, GlyphStyle, MemgraphConfig, MemoryMetric, SamplerConfig};

use memgraph_core::{MemError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Load configuration from a TOML file. Returns `MemgraphConfig::default()`
/// if the file doesn't exist so monitoring always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<MemgraphConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(MemgraphConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| MemError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config: MemgraphConfig =
        toml::from_str(&raw).map_err(|e| MemError::Config(format!("TOML parse error: {e}")))?;
    validate_interval(config.sampler.interval_secs)?;
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("memgraph").join("memgraph.toml")
}

/// Convert an update interval in seconds to a [`Duration`], rejecting
/// values that are not strictly positive, finite and representable.
pub fn validate_interval(secs: f64) -> Result<Duration> {
    if !(secs.is_finite() && secs > 0.0) {
        return Err(MemError::Config(format!(
            "update interval must be a positive number of seconds, got {secs}"
        )));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| MemError::Config(format!("update interval {secs}s is out of range: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, MemgraphConfig::default());
        assert_eq!(config.sampler.interval_secs, 1.0);
        assert_eq!(config.sampler.metric, MemoryMetric::Virtual);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memgraph.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[sampler]\nmetric = \"resident\"\nhistory_limit = 600").unwrap();
        writeln!(file, "[chart]\nstyle = \"ascii\"").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.sampler.metric, MemoryMetric::Resident);
        assert_eq!(config.sampler.history_limit, 600);
        assert_eq!(config.sampler.interval_secs, 1.0);
        assert_eq!(config.chart.style, GlyphStyle::Ascii);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memgraph.toml");
        std::fs::write(&path, "[sampler\ninterval_secs = ").unwrap();
        assert!(matches!(load(&path), Err(MemError::Config(_))));
    }

    #[test]
    fn non_positive_interval_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memgraph.toml");
        std::fs::write(&path, "[sampler]\ninterval_secs = 0.0\n").unwrap();
        assert!(matches!(load(&path), Err(MemError::Config(_))));
        assert!(validate_interval(-1.0).is_err());
        assert!(validate_interval(f64::INFINITY).is_err());
        assert_eq!(validate_interval(0.25).unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn huge_interval_is_an_error_not_a_panic() {
        assert!(matches!(validate_interval(1e20), Err(MemError::Config(_))));
        assert!(matches!(validate_interval(f64::MAX), Err(MemError::Config(_))));
    }

    #[test]
    fn default_path_ends_with_file_name() {
        assert!(default_path().ends_with("memgraph/memgraph.toml"));
    }
}
