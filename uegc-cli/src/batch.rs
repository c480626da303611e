//! Segmenting several sources, optionally on a rayon thread pool

use crate::input::InputSource;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use rayon::prelude::*;
use uegc_core::{Boundaries, Segmentation, Segmenter};

/// A source read and segmented
#[derive(Debug, Clone)]
pub struct SegmentedSource {
    /// Display name
    pub name: String,
    /// Full source text
    pub text: String,
    /// Cluster boundaries of `text`
    pub boundaries: Boundaries,
}

impl SegmentedSource {
    /// Clusters with offsets
    pub fn segmentation(&self) -> Segmentation<'_> {
        Segmentation::new(&self.text, &self.boundaries)
    }
}

/// How to run a batch
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// Use a thread pool when there is more than one source
    pub parallel: bool,
    /// Pool size
    pub threads: usize,
}

/// Read and segment every source, keeping input order
pub fn segment_sources(
    segmenter: &Segmenter,
    sources: &[InputSource],
    options: BatchOptions,
    progress: &ProgressReporter,
) -> Result<Vec<SegmentedSource>> {
    let run = |source: &InputSource| -> Result<SegmentedSource> {
        let name = source.name();
        let text = source.read()?;
        let boundaries = segmenter
            .boundaries(&text)
            .with_context(|| format!("Failed to segment {name}"))?;
        log::debug!("{name}: {} clusters", boundaries.cluster_count());
        progress.file_completed(&name);
        Ok(SegmentedSource {
            name,
            text,
            boundaries,
        })
    };

    if options.parallel && sources.len() > 1 {
        log::info!(
            "Segmenting {} sources on {} threads",
            sources.len(),
            options.threads
        );
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.threads)
            .build()
            .context("Failed to build thread pool")?;
        pool.install(|| sources.par_iter().map(run).collect())
    } else {
        sources.iter().map(run).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parallel_matches_sequential() {
        let temp_dir = TempDir::new().unwrap();
        let sources: Vec<InputSource> = (0..6)
            .map(|i| {
                let path = temp_dir.path().join(format!("{i}.txt"));
                fs::write(&path, "e\u{301}".repeat(i + 1)).unwrap();
                InputSource::File(path)
            })
            .collect();
        let segmenter = Segmenter::new().unwrap();
        let progress = ProgressReporter::new(true);

        let sequential = segment_sources(
            &segmenter,
            &sources,
            BatchOptions {
                parallel: false,
                threads: 1,
            },
            &progress,
        )
        .unwrap();
        let parallel = segment_sources(
            &segmenter,
            &sources,
            BatchOptions {
                parallel: true,
                threads: 3,
            },
            &progress,
        )
        .unwrap();

        assert_eq!(sequential.len(), 6);
        for (i, (a, b)) in sequential.iter().zip(&parallel).enumerate() {
            assert_eq!(a.name, b.name);
            assert_eq!(a.boundaries, b.boundaries);
            assert_eq!(a.boundaries.cluster_count(), i + 1);
        }
    }

    #[test]
    fn test_error_names_source() {
        let segmenter = Segmenter::with_config(uegc_core::SegmenterConfig::strict()).unwrap();
        let error = segment_sources(
            &segmenter,
            &[InputSource::Inline(String::new())],
            BatchOptions {
                parallel: false,
                threads: 1,
            },
            &ProgressReporter::new(true),
        )
        .unwrap_err();
        assert!(error.to_string().contains("<text>"));
    }
}
