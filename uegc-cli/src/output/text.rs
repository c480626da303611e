//! Plain text output formatter

use super::{code_point_labels, escape_cluster, FormatOptions, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use uegc_core::Cluster;

/// Plain text formatter - outputs one cluster per line
pub struct TextFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    sources: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            sources: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        if self.options.grouped {
            if self.sources > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {name} <==")?;
        }
        self.sources += 1;
        Ok(())
    }

    fn format_cluster(&mut self, cluster: &Cluster<'_>) -> Result<()> {
        if self.options.code_points {
            writeln!(self.writer, "{}", code_point_labels(cluster.text).join(" "))?;
        } else {
            writeln!(self.writer, "{}", escape_cluster(cluster.text))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
