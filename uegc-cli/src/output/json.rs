//! JSON output formatter

use super::{code_point_labels, FormatOptions, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use uegc_core::Cluster;

/// JSON formatter - outputs clusters as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    sources: Vec<SourceData>,
}

/// Data structure for one cluster in JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ClusterData {
    /// The cluster text
    pub text: String,
    /// Byte offset in the source text
    pub byte_offset: usize,
    /// Code point offset in the source text
    pub char_offset: usize,
    /// Code points as U+XXXX labels
    pub code_points: Vec<String>,
}

/// Clusters of one input source
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SourceData {
    /// Source name (file path or `<text>`/`<stdin>`)
    pub source: String,
    /// Clusters in order
    pub clusters: Vec<ClusterData>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            sources: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.options.pretty_json {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        self.sources.push(SourceData {
            source: name.to_string(),
            clusters: Vec::new(),
        });
        Ok(())
    }

    fn format_cluster(&mut self, cluster: &Cluster<'_>) -> Result<()> {
        let data = ClusterData {
            text: cluster.text.to_string(),
            byte_offset: cluster.byte_offset,
            char_offset: cluster.char_offset,
            code_points: code_point_labels(cluster.text),
        };
        match self.sources.last_mut() {
            Some(source) => source.clusters.push(data),
            None => self.sources.push(SourceData {
                source: String::new(),
                clusters: vec![data],
            }),
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let sources = std::mem::take(&mut self.sources);
        if self.options.grouped {
            self.write_value(&sources)?;
        } else {
            let clusters: Vec<ClusterData> =
                sources.into_iter().flat_map(|source| source.clusters).collect();
            self.write_value(&clusters)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(options: FormatOptions) -> String {
        let mut out = Vec::new();
        let mut formatter = JsonFormatter::new(&mut out, options);
        formatter.begin_source("sample.txt").unwrap();
        formatter
            .format_cluster(&Cluster {
                text: "e\u{301}",
                byte_offset: 0,
                char_offset: 0,
                code_points: 2,
            })
            .unwrap();
        formatter.finish().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_flat_array() {
        let output = run(FormatOptions::default());
        let parsed: Vec<ClusterData> = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed,
            vec![ClusterData {
                text: "e\u{301}".to_string(),
                byte_offset: 0,
                char_offset: 0,
                code_points: vec!["U+0065".to_string(), "U+0301".to_string()],
            }]
        );
        assert!(!output.trim_end().contains('\n'));
    }

    #[test]
    fn test_grouped_pretty() {
        let output = run(FormatOptions {
            grouped: true,
            pretty_json: true,
            ..FormatOptions::default()
        });
        let parsed: Vec<SourceData> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0].source, "sample.txt");
        assert_eq!(parsed[0].clusters.len(), 1);
        assert!(output.contains("\n  "));
    }
}
