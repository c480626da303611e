//! Segmentation results

use crate::domain::boundary::Boundaries;
use std::ops::Range;

/// One extended grapheme cluster with its position in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cluster<'t> {
    /// Cluster text
    pub text: &'t str,
    /// Byte offset of the first code point
    pub byte_offset: usize,
    /// Code point offset of the first code point
    pub char_offset: usize,
    /// Number of code points in the cluster
    pub code_points: usize,
}

impl Cluster<'_> {
    /// Byte range of the cluster in the source text
    pub fn byte_range(&self) -> Range<usize> {
        self.byte_offset..self.byte_offset + self.text.len()
    }

    /// Scalar values of the cluster
    pub fn code_point_values(&self) -> Vec<u32> {
        self.text.chars().map(u32::from).collect()
    }
}

/// Summary figures for one segmentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentationStats {
    /// Total bytes processed
    pub bytes: usize,
    /// Total code points processed
    pub code_points: usize,
    /// Number of clusters
    pub clusters: usize,
    /// Code points in the longest cluster
    pub longest_cluster: usize,
    /// Clusters made of more than one code point
    pub multi_code_point_clusters: usize,
}

/// Clusters of a text together with summary statistics
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segmentation<'t> {
    /// Clusters in text order
    pub clusters: Vec<Cluster<'t>>,
    /// Summary statistics
    pub stats: SegmentationStats,
}

impl<'t> Segmentation<'t> {
    /// Materialize clusters of `text` from its boundaries
    pub fn new(text: &'t str, boundaries: &Boundaries) -> Self {
        let mut clusters = Vec::with_capacity(boundaries.cluster_count());
        let mut stats = SegmentationStats {
            bytes: text.len(),
            ..SegmentationStats::default()
        };

        for range in boundaries.ranges() {
            let byte_offset = range.start;
            let slice = &text[range];
            let code_points = slice.chars().count();
            clusters.push(Cluster {
                text: slice,
                byte_offset,
                char_offset: stats.code_points,
                code_points,
            });
            stats.code_points += code_points;
            stats.longest_cluster = stats.longest_cluster.max(code_points);
            if code_points > 1 {
                stats.multi_code_point_clusters += 1;
            }
        }
        stats.clusters = clusters.len();

        Self { clusters, stats }
    }

    /// Cluster texts in order
    pub fn texts(&self) -> Vec<&'t str> {
        self.clusters.iter().map(|cluster| cluster.text).collect()
    }

    /// Number of clusters
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether there are no clusters
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

/// Iterator over the clusters of a text
#[derive(Debug, Clone)]
pub struct Graphemes<'t> {
    text: &'t str,
    boundaries: Boundaries,
    front: usize,
    back: usize,
}

impl<'t> Graphemes<'t> {
    pub(crate) fn new(text: &'t str, boundaries: Boundaries) -> Self {
        let back = boundaries.cluster_count();
        Self {
            text,
            boundaries,
            front: 0,
            back,
        }
    }

    fn slice(&self, cluster: usize) -> &'t str {
        let offsets = self.boundaries.offsets();
        &self.text[offsets[cluster]..offsets[cluster + 1]]
    }
}

impl<'t> Iterator for Graphemes<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let cluster = self.slice(self.front);
        self.front += 1;
        Some(cluster)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Graphemes<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.slice(self.back))
    }
}

impl ExactSizeIterator for Graphemes<'_> {}
