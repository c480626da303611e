//! uegc CLI library
//!
//! This library provides the command-line interface for Unicode extended
//! grapheme cluster segmentation built on `uegc-core`.

pub mod batch;
pub mod commands;
pub mod config;
pub mod conformance;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
