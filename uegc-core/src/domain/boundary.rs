//! Cluster boundary offsets

use smallvec::SmallVec;
use std::ops::Range;

/// Byte offsets of grapheme cluster boundaries
///
/// Always starts with 0, ends with the input length and is strictly
/// increasing. Empty input yields the single offset 0 and no clusters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Boundaries {
    offsets: SmallVec<[usize; 32]>,
}

impl Boundaries {
    /// Boundaries of the empty string
    pub fn empty() -> Self {
        let mut offsets = SmallVec::new();
        offsets.push(0);
        Self { offsets }
    }

    /// Builder state holding only the leading 0
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut offsets = SmallVec::with_capacity(capacity + 1);
        offsets.push(0);
        Self { offsets }
    }

    pub(crate) fn push(&mut self, offset: usize) {
        debug_assert!(self.offsets.last().is_some_and(|&last| last < offset));
        self.offsets.push(offset);
    }

    pub(crate) fn finish(mut self, len: usize) -> Self {
        if self.offsets.last().is_some_and(|&last| last < len) {
            self.offsets.push(len);
        }
        self
    }

    /// All boundary offsets, including 0 and the text length
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of clusters
    pub fn cluster_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Whether the segmented text was empty
    pub fn is_empty(&self) -> bool {
        self.cluster_count() == 0
    }

    /// Whether `offset` is a boundary
    pub fn contains(&self, offset: usize) -> bool {
        self.offsets.binary_search(&offset).is_ok()
    }

    /// Byte ranges of the clusters
    pub fn ranges(&self) -> impl DoubleEndedIterator<Item = Range<usize>> + ExactSizeIterator + '_ {
        self.offsets.windows(2).map(|pair| pair[0]..pair[1])
    }

    /// Cluster slices of `text`, which must be the text these boundaries
    /// were computed for
    pub fn slices<'a, 't: 'a>(&'a self, text: &'t str) -> impl Iterator<Item = &'t str> + 'a {
        self.ranges().map(move |range| &text[range])
    }
}
