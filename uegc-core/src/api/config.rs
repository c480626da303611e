//! High-level configuration API

use crate::api::segmenter::Segmenter;
use crate::error::{Result, SegmentError};
use std::fmt;
use std::str::FromStr;

/// What to do with empty input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum EmptyInputPolicy {
    /// Return zero clusters
    #[default]
    Empty,
    /// Fail with [`SegmentError::EmptyInput`]
    Reject,
}

impl EmptyInputPolicy {
    /// Configuration spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for EmptyInputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmptyInputPolicy {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" | "allow" => Ok(Self::Empty),
            "reject" | "error" => Ok(Self::Reject),
            other => Err(SegmentError::Configuration(format!(
                "unknown empty input policy '{other}' (expected 'empty' or 'reject')"
            ))),
        }
    }
}

/// Segmenter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmenterConfig {
    empty_input: EmptyInputPolicy,
    all_other_fast_path: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            empty_input: EmptyInputPolicy::Empty,
            all_other_fast_path: true,
        }
    }
}

impl SegmenterConfig {
    /// Configuration that rejects empty input
    pub fn strict() -> Self {
        Self {
            empty_input: EmptyInputPolicy::Reject,
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> SegmenterConfigBuilder {
        SegmenterConfigBuilder::default()
    }

    /// Empty input handling
    pub fn empty_input(&self) -> EmptyInputPolicy {
        self.empty_input
    }

    /// Whether the all-`Other` shortcut is enabled
    pub fn all_other_fast_path(&self) -> bool {
        self.all_other_fast_path
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct SegmenterConfigBuilder {
    config: SegmenterConfig,
    policy_name: Option<String>,
}

impl SegmenterConfigBuilder {
    /// Set the empty input policy
    pub fn empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.config.empty_input = policy;
        self.policy_name = None;
        self
    }

    /// Set the empty input policy by name, checked in [`build`](Self::build)
    pub fn empty_input_named(mut self, name: impl Into<String>) -> Self {
        self.policy_name = Some(name.into());
        self
    }

    /// Enable or disable the all-`Other` shortcut
    pub fn all_other_fast_path(mut self, enabled: bool) -> Self {
        self.config.all_other_fast_path = enabled;
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> Result<SegmenterConfig> {
        if let Some(name) = self.policy_name.take() {
            self.config.empty_input = name.parse()?;
        }
        Ok(self.config)
    }

    /// Build a segmenter directly
    pub fn build_segmenter(self) -> Result<Segmenter> {
        Segmenter::with_config(self.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SegmenterConfig::default();
        assert_eq!(config.empty_input(), EmptyInputPolicy::Empty);
        assert!(config.all_other_fast_path());
        assert_eq!(SegmenterConfig::strict().empty_input(), EmptyInputPolicy::Reject);
    }

    #[test]
    fn test_builder() {
        let config = SegmenterConfig::builder()
            .empty_input(EmptyInputPolicy::Reject)
            .all_other_fast_path(false)
            .build()
            .unwrap();
        assert_eq!(config.empty_input(), EmptyInputPolicy::Reject);
        assert!(!config.all_other_fast_path());
    }

    #[test]
    fn test_builder_policy_by_name() {
        let config = SegmenterConfig::builder()
            .empty_input_named("Reject")
            .build()
            .unwrap();
        assert_eq!(config, SegmenterConfig::strict());

        let result = SegmenterConfig::builder().empty_input_named("maybe").build();
        assert!(matches!(result, Err(SegmentError::Configuration(_))));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("empty".parse::<EmptyInputPolicy>(), Ok(EmptyInputPolicy::Empty));
        assert_eq!(" ERROR ".parse::<EmptyInputPolicy>(), Ok(EmptyInputPolicy::Reject));
        assert_eq!(EmptyInputPolicy::Reject.to_string(), "reject");
    }
}
