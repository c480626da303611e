//! Segmenter facade

use crate::api::config::{EmptyInputPolicy, SegmenterConfig};
use crate::api::output::{Graphemes, Segmentation};
use crate::domain::boundary::Boundaries;
use crate::domain::decision::BreakDecision;
use crate::domain::scanner::Scanner;
use crate::error::{Result, SegmentError};
use crate::tables::PropertyTable;

/// Main entry point for grapheme cluster segmentation
///
/// A segmenter is cheap to create and to clone: it borrows the shared,
/// immutable property tables and holds only its configuration. It can be
/// used from any number of threads at once.
#[derive(Debug, Clone)]
pub struct Segmenter {
    table: &'static PropertyTable,
    config: SegmenterConfig,
}

impl Segmenter {
    /// Create a segmenter with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(SegmenterConfig::default())
    }

    /// Create a segmenter with custom configuration
    pub fn with_config(config: SegmenterConfig) -> Result<Self> {
        let table = PropertyTable::bundled()?;
        Ok(Self { table, config })
    }

    /// Active configuration
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Property tables in use
    pub fn table(&self) -> &'static PropertyTable {
        self.table
    }

    /// Byte offsets of all cluster boundaries
    pub fn boundaries(&self, text: &str) -> Result<Boundaries> {
        self.check_input(text)?;
        Ok(self.scanner().scan(text))
    }

    /// Split `text` into extended grapheme clusters
    pub fn segment<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        let boundaries = self.boundaries(text)?;
        Ok(boundaries.slices(text).collect())
    }

    /// Lazily iterate over the clusters of `text`
    pub fn graphemes<'t>(&self, text: &'t str) -> Result<Graphemes<'t>> {
        Ok(Graphemes::new(text, self.boundaries(text)?))
    }

    /// Clusters paired with their byte offsets
    pub fn cluster_indices<'t>(&self, text: &'t str) -> Result<Vec<(usize, &'t str)>> {
        let boundaries = self.boundaries(text)?;
        Ok(boundaries
            .ranges()
            .map(|range| (range.start, &text[range]))
            .collect())
    }

    /// Clusters with positions and statistics
    pub fn clusters<'t>(&self, text: &'t str) -> Result<Segmentation<'t>> {
        let boundaries = self.boundaries(text)?;
        Ok(Segmentation::new(text, &boundaries))
    }

    /// Number of clusters in `text`
    pub fn count(&self, text: &str) -> Result<usize> {
        Ok(self.boundaries(text)?.cluster_count())
    }

    /// Longest prefix of `text` holding at most `max_clusters` clusters
    pub fn truncate<'t>(&self, text: &'t str, max_clusters: usize) -> Result<&'t str> {
        let boundaries = self.boundaries(text)?;
        let offsets = boundaries.offsets();
        let end = offsets[max_clusters.min(offsets.len() - 1)];
        Ok(&text[..end])
    }

    /// Every pair decision with the rule that made it
    pub fn explain(&self, text: &str) -> Result<Vec<BreakDecision>> {
        self.check_input(text)?;
        let mut decisions = Vec::with_capacity(text.len());
        self.scanner()
            .scan_with(text, |decision| decisions.push(*decision));
        Ok(decisions)
    }

    /// Segment a sequence of code points given as integers
    ///
    /// Fails with [`SegmentError::InvalidInput`] at the first value that is
    /// a surrogate or lies beyond U+10FFFF.
    pub fn segment_code_points(&self, code_points: &[u32]) -> Result<Vec<String>> {
        let text = string_from_code_points(code_points)?;
        Ok(self
            .segment(&text)?
            .into_iter()
            .map(str::to_owned)
            .collect())
    }

    /// Segment UTF-8 bytes, rejecting ill-formed sequences
    pub fn segment_utf8<'b>(&self, bytes: &'b [u8]) -> Result<Vec<&'b str>> {
        let text = std::str::from_utf8(bytes).map_err(|e| SegmentError::InvalidInput {
            position: e.valid_up_to(),
            reason: e.to_string(),
        })?;
        self.segment(text)
    }

    fn scanner(&self) -> Scanner<'static, PropertyTable> {
        Scanner::new(self.table).with_fast_path(self.config.all_other_fast_path())
    }

    fn check_input(&self, text: &str) -> Result<()> {
        if text.is_empty() && self.config.empty_input() == EmptyInputPolicy::Reject {
            return Err(SegmentError::EmptyInput);
        }
        Ok(())
    }
}

/// Build a string from integer code points
///
/// Fails with [`SegmentError::InvalidInput`] at the first value that is
/// a surrogate or lies beyond U+10FFFF.
pub fn string_from_code_points(code_points: &[u32]) -> Result<String> {
    code_points
        .iter()
        .enumerate()
        .map(|(position, &cp)| {
            char::from_u32(cp).ok_or_else(|| SegmentError::InvalidInput {
                position,
                reason: format!("U+{cp:04X} is not a Unicode scalar value"),
            })
        })
        .collect()
}
