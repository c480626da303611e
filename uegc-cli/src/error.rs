//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// A line of a break test file could not be parsed
    InvalidTestFile {
        /// 1-based line number
        line: usize,
        /// What was wrong
        reason: String,
    },
    /// Conformance lines that did not match
    ConformanceFailures {
        /// Lines that failed
        failed: usize,
        /// Lines checked
        total: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidTestFile { line, reason } => {
                write!(f, "Invalid test file at line {line}: {reason}")
            }
            CliError::ConformanceFailures { failed, total } => {
                write!(f, "Conformance failed: {failed} of {total} lines did not match")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
