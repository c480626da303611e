//! Markdown output formatter

use super::{code_point_labels, escape_cluster, FormatOptions, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use uegc_core::Cluster;

/// Markdown formatter - outputs clusters as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    cluster_count: usize,
    source_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            cluster_count: 0,
            source_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        if self.options.grouped {
            if self.source_count > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {name}")?;
            writeln!(self.writer)?;
        }
        self.source_count += 1;
        Ok(())
    }

    fn format_cluster(&mut self, cluster: &Cluster<'_>) -> Result<()> {
        self.cluster_count += 1;
        let labels = code_point_labels(cluster.text).join(" ");
        if self.options.code_points {
            writeln!(self.writer, "{}. {labels}", self.cluster_count)?;
        } else {
            writeln!(
                self.writer,
                "{}. `{}` ({labels})",
                self.cluster_count,
                escape_cluster(cluster.text)
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total clusters: {}*", self.cluster_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
