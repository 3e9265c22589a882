//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use clausal_engine::{DEFAULT_SAMPLE_SIZE, DEFAULT_TARGET_SIZE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&source)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<(), CliError> {
        if self.processing.sample_size == 0 {
            return Err(CliError::ConfigError(
                "processing.sample_size must be at least 1".to_string(),
            ));
        }
        if self.processing.target_size == 0 {
            return Err(CliError::ConfigError(
                "processing.target_size must be at least 1".to_string(),
            ));
        }
        if !["text", "json", "markdown"].contains(&self.output.default_format.as_str()) {
            return Err(CliError::ConfigError(format!(
                "unknown output.default_format '{}'",
                self.output.default_format
            )));
        }
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Processing-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Leading sentences considered per batch
    pub sample_size: usize,

    /// Records after which collection stops
    pub target_size: usize,

    /// External lexicon file (embedded English when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            target_size: DEFAULT_TARGET_SIZE,
            lexicon: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Spaces per indentation level in JSON output
    pub json_indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            json_indent: 4,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Annotate sentences on the rayon pool
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            worker_threads: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let config = CliConfig::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("sample_size = 400"));
        assert!(text.contains("json_indent = 4"));

        let parsed: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[processing]\ntarget_size = 10\n\n[performance]\nparallel = true\n"
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.processing.target_size, 10);
        assert_eq!(config.processing.sample_size, 400);
        assert!(config.performance.parallel);
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = CliConfig::default();
        config.output.default_format = "xml".to_string();
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.processing.target_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/clausal.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
