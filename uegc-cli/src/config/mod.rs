//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uegc_core::{EmptyInputPolicy, SegmenterConfig};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Empty input policy: "empty" or "reject"
    pub empty_input: String,

    /// Use the shortcut for text without any special code points
    pub all_other_fast_path: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            empty_input: EmptyInputPolicy::default().to_string(),
            all_other_fast_path: true,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Print clusters as U+XXXX code points
    pub show_code_points: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            show_code_points: false,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Segment multiple input files in parallel
    pub parallel_files: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_files: false,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Check values that TOML types alone cannot
    pub fn validate(&self) -> Result<()> {
        self.empty_input_policy()?;
        self.output_format()?;
        Ok(())
    }

    /// Parsed empty input policy
    pub fn empty_input_policy(&self) -> Result<EmptyInputPolicy> {
        self.segmentation
            .empty_input
            .parse()
            .map_err(|e: uegc_core::SegmentError| CliError::ConfigError(e.to_string()).into())
    }

    /// Parsed default output format
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            ))
            .into()
        })
    }

    /// Segmenter configuration; `reject_empty` overrides the file
    pub fn segmenter_config(&self, reject_empty: bool) -> Result<SegmenterConfig> {
        let policy = if reject_empty {
            EmptyInputPolicy::Reject
        } else {
            self.empty_input_policy()?
        };
        Ok(SegmenterConfig::builder()
            .empty_input(policy)
            .all_other_fast_path(self.segmentation.all_other_fast_path)
            .build()?)
    }

    /// Worker thread count, resolving 0 to the number of CPUs
    pub fn worker_threads(&self, requested: Option<usize>) -> usize {
        match requested.unwrap_or(self.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        }
    }

    /// Commented configuration template
    pub fn template() -> String {
        let defaults = Self::default();
        format!(
            r#"# uegc configuration
#
# Command-line flags override the values below.

[segmentation]
# What to do with empty input: "empty" (zero clusters) or "reject" (error)
empty_input = "{empty_input}"
# Skip the rule engine for text made only of code points without a break property
all_other_fast_path = {fast_path}

[output]
# Default output format: "text", "json" or "markdown"
default_format = "{format}"
# Indent JSON output
pretty_json = {pretty}
# Print clusters as U+XXXX code points instead of text
show_code_points = {code_points}

[performance]
# Segment several input files in parallel
parallel_files = {parallel}
# Worker threads for parallel runs (0 = one per CPU)
worker_threads = {threads}
"#,
            empty_input = defaults.segmentation.empty_input,
            fast_path = defaults.segmentation.all_other_fast_path,
            format = defaults.output.default_format,
            pretty = defaults.output.pretty_json,
            code_points = defaults.output.show_code_points,
            parallel = defaults.performance.parallel_files,
            threads = defaults.performance.worker_threads,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_template_parses_to_defaults() {
        let parsed: CliConfig = toml::from_str(&CliConfig::template()).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\ndefault_format = \"json\"\n").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
        assert!(config.output.pretty_json);
        assert_eq!(config.segmentation, SegmentationConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[segmentation]\nempty_input = \"sometimes\"\n").unwrap();
        let error = CliConfig::load(file.path()).unwrap_err();
        assert!(error.to_string().contains("Configuration error"));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\ndefault_format = \"xml\"\n").unwrap();
        assert!(CliConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_segmenter_config_override() {
        let config = CliConfig::default();
        assert_eq!(
            config.segmenter_config(false).unwrap().empty_input(),
            EmptyInputPolicy::Empty
        );
        assert_eq!(
            config.segmenter_config(true).unwrap().empty_input(),
            EmptyInputPolicy::Reject
        );
    }

    #[test]
    fn test_worker_threads() {
        let config = CliConfig::default();
        assert_eq!(config.worker_threads(Some(3)), 3);
        assert_eq!(config.worker_threads(None), num_cpus::get());
    }

    #[test]
    fn test_missing_file() {
        let error = CliConfig::load(Path::new("/nonexistent/uegc.toml")).unwrap_err();
        assert!(error.to_string().contains("Failed to read config file"));
    }
}
