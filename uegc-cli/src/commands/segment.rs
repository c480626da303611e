//! Segment command implementation

use crate::batch::{segment_sources, BatchOptions};
use crate::config::CliConfig;
use crate::input::InputArgs;
use crate::logging::Verbosity;
use crate::output::{create_formatter, FormatOptions, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use uegc_core::Segmenter;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print clusters as U+XXXX code points
    #[arg(long)]
    pub code_points: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fail on empty input instead of printing nothing
    #[arg(long)]
    pub reject_empty: bool,

    /// Segment multiple files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel runs (default: from config, 0 = all CPUs)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        self.verbosity.init_logging();

        log::info!("Starting segmentation");
        log::debug!("Arguments: {self:?}");

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let segmenter = Segmenter::with_config(config.segmenter_config(self.reject_empty)?)?;
        let format = match self.format {
            Some(format) => format,
            None => config.output_format()?,
        };

        let sources = self.input.resolve()?;
        let mut progress = ProgressReporter::new(self.verbosity.quiet || sources.len() < 2);
        progress.init_files(sources.len() as u64);

        let batch = BatchOptions {
            parallel: self.parallel || config.performance.parallel_files,
            threads: config.worker_threads(self.threads),
        };
        let segmented = segment_sources(&segmenter, &sources, batch, &progress)?;
        progress.finish();

        let options = FormatOptions {
            code_points: self.code_points || config.output.show_code_points,
            pretty_json: config.output.pretty_json,
            grouped: segmented.len() > 1,
        };
        let mut formatter = create_formatter(format, open_output(self.output.as_deref())?, options);
        for source in &segmented {
            formatter.begin_source(&source.name)?;
            for cluster in &source.segmentation().clusters {
                formatter.format_cluster(cluster)?;
            }
        }
        formatter.finish()?;

        log::info!("Segmented {} source(s)", segmented.len());
        Ok(())
    }
}

/// Writer for `path`, or stdout
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
