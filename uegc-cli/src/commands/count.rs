//! Count command implementation

use crate::batch::{segment_sources, BatchOptions};
use crate::config::CliConfig;
use crate::input::InputArgs;
use crate::logging::Verbosity;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use uegc_core::Segmenter;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fail on empty input instead of counting zero
    #[arg(long)]
    pub reject_empty: bool,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        self.verbosity.init_logging();

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let segmenter = Segmenter::with_config(config.segmenter_config(self.reject_empty)?)?;
        let sources = self.input.resolve()?;

        let batch = BatchOptions {
            parallel: config.performance.parallel_files,
            threads: config.worker_threads(None),
        };
        let segmented = segment_sources(&segmenter, &sources, batch, &ProgressReporter::new(true))?;

        if let [single] = segmented.as_slice() {
            println!("{}", single.boundaries.cluster_count());
            return Ok(());
        }

        let mut total = 0;
        for source in &segmented {
            let count = source.boundaries.cluster_count();
            total += count;
            println!("{count}\t{}", source.name);
        }
        println!("{total}\ttotal");
        Ok(())
    }
}
