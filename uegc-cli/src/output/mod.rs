//! Output formatting module

use anyhow::Result;
use std::io::Write;
use uegc_core::Cluster;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Start the clusters of a new input source
    fn begin_source(&mut self, name: &str) -> Result<()>;

    /// Format and output a single cluster
    fn format_cluster(&mut self, cluster: &Cluster<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one cluster per line
    Text,
    /// JSON array of clusters with offsets
    Json,
    /// Markdown numbered list
    Markdown,
}

/// Presentation options shared by the formatters
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Print U+XXXX code points instead of cluster text
    pub code_points: bool,
    /// Indent JSON
    pub pretty_json: bool,
    /// Several sources are being printed; label each one
    pub grouped: bool,
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    options: FormatOptions,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options)),
    }
}

/// Cluster text with control characters escaped, so each cluster fits on one line
pub fn escape_cluster(cluster: &str) -> String {
    cluster
        .chars()
        .map(|ch| {
            if ch.is_control() {
                ch.escape_default().to_string()
            } else {
                ch.to_string()
            }
        })
        .collect()
}

/// `U+XXXX` labels of the code points in `cluster`
pub fn code_point_labels(cluster: &str) -> Vec<String> {
    cluster
        .chars()
        .map(|ch| format!("U+{:04X}", u32::from(ch)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_cluster() {
        assert_eq!(escape_cluster("\r\n"), "\\r\\n");
        assert_eq!(escape_cluster("\u{0}"), "\\u{0}");
        assert_eq!(escape_cluster("e\u{301}"), "e\u{301}");
    }

    #[test]
    fn test_code_point_labels() {
        assert_eq!(
            code_point_labels("e\u{301}\u{1F1FA}"),
            vec!["U+0065", "U+0301", "U+1F1FA"]
        );
    }
}
