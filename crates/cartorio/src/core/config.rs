//! Pipeline configuration loading and management.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CartorioError, Result};

/// Page-span length above which extraction emits a long-range warning.
const DEFAULT_LONG_RANGE_WARNING: usize = 10;

/// Tuning knobs for the pipelines.
///
/// Loadable from a TOML file or created programmatically; every field has a
/// default, so an empty file is a valid configuration.
///
/// # Example
///
/// ```rust
/// use cartorio::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.long_range_warning, 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum concurrent record extractions (None = num_cpus * 2).
    ///
    /// Limits parallelism to prevent resource exhaustion on large indexes.
    #[serde(default)]
    pub max_concurrent_extractions: Option<usize>,

    /// Page-span length above which a non-fatal warning event is emitted
    /// before extraction.
    #[serde(default = "default_long_range_warning")]
    pub long_range_warning: usize,
}

fn default_long_range_warning() -> usize {
    DEFAULT_LONG_RANGE_WARNING
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            max_concurrent_extractions: None,
            long_range_warning: DEFAULT_LONG_RANGE_WARNING,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `CartorioError::Io` when the file cannot be read and
    /// `CartorioError::Validation` when it is not valid TOML for this
    /// structure.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| {
            CartorioError::validation(format!("invalid config file {}: {err}", path.display()))
        })
    }

    /// Effective concurrency limit for batch extraction.
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrent_extractions
            .unwrap_or_else(|| num_cpus::get() * 2)
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_concurrent_extractions, None);
        assert_eq!(config.long_range_warning, 10);
        assert!(config.effective_concurrency() >= 1);
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: PipelineConfig = toml::from_str("").unwrap();
        assert_eq!(config.long_range_warning, 10);
    }

    #[test]
    fn test_toml_overrides() {
        let config: PipelineConfig = toml::from_str(
            "max_concurrent_extractions = 4\nlong_range_warning = 25\n",
        )
        .unwrap();
        assert_eq!(config.max_concurrent_extractions, Some(4));
        assert_eq!(config.long_range_warning, 25);
        assert_eq!(config.effective_concurrency(), 4);
    }

    #[test]
    fn test_zero_concurrency_clamps_to_one() {
        let config = PipelineConfig {
            max_concurrent_extractions: Some(0),
            ..PipelineConfig::default()
        };
        assert_eq!(config.effective_concurrency(), 1);
    }
}
