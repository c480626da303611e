//! Error types for grapheme cluster segmentation (deterministic only)

use crate::tables::UnicodeVersion;
use thiserror::Error;

/// Errors surfaced by the segmentation engine
///
/// None of these are transient: segmentation is deterministic and
/// side-effect free, so retrying a failed call can never succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// The argument is not a valid sequence of Unicode scalar values
    #[error("invalid input at position {position}: {reason}")]
    InvalidInput {
        /// Code point index (for code point input) or byte offset (for UTF-8 input)
        position: usize,
        /// Human-readable description of the problem
        reason: String,
    },

    /// Empty input was rejected by [`EmptyInputPolicy::Reject`](crate::EmptyInputPolicy::Reject)
    #[error("empty input rejected by configuration")]
    EmptyInput,

    /// The compiled property tables target a different Unicode version
    #[error(
        "property tables were compiled for Unicode {found}, but the engine expects Unicode {expected}"
    )]
    TableVersionMismatch {
        /// Version the engine was written against
        expected: UnicodeVersion,
        /// Version recorded in the compiled tables
        found: UnicodeVersion,
    },

    /// The compiled property tables violate the data feed contract
    #[error("malformed property table: {0}")]
    MalformedTable(String),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A break property name that is not one of the 15 known values
    #[error("unknown break property: {0}")]
    UnknownProperty(String),
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, SegmentError>;
