//! Unicode extended grapheme cluster segmentation (UAX #29)
//!
//! This crate splits text into user-perceived characters: a base letter with
//! its combining marks, a Hangul syllable, an emoji ZWJ sequence, a flag, an
//! Indic conjunct. Boundaries follow the grapheme cluster rules of Unicode
//! [`UNICODE_VERSION`], including the context-sensitive rules for emoji
//! sequences (GB11), regional indicator pairs (GB12/GB13) and Indic
//! conjuncts (GB9c).
//!
//! # Architecture
//!
//! - **Tables**: compiled UCD extracts and the [`PropertyTable`] classifier
//! - **Domain**: the break chart, the conjunct pre-pass and the single-pass
//!   [`Scanner`](domain::Scanner)
//! - **API**: the [`Segmenter`] facade and its configuration
//!
//! # Example
//!
//! ```rust
//! use uegc_core::Segmenter;
//!
//! let segmenter = Segmenter::new().unwrap();
//! let clusters = segmenter.segment("e\u{301}le\u{300}ve").unwrap();
//! assert_eq!(clusters, vec!["e\u{301}", "l", "e\u{300}", "v", "e"]);
//!
//! // A family emoji is a single cluster
//! assert_eq!(uegc_core::count("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}").unwrap(), 1);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod domain;
pub mod error;
pub mod tables;

pub use api::{
    string_from_code_points, Cluster, EmptyInputPolicy, Graphemes, Segmentation,
    SegmentationStats, Segmenter, SegmenterConfig, SegmenterConfigBuilder,
};
pub use domain::{Boundaries, BreakDecision, BreakProperty, ConjunctClass, Decision, Rule};
pub use error::{Result, SegmentError};
pub use tables::{PropertyTable, UcdData, UnicodeVersion};

/// Unicode version whose rules this engine implements
pub const UNICODE_VERSION: UnicodeVersion = UnicodeVersion::new(17, 0, 0);

/// Build the shared property tables now instead of on first use
///
/// Calling this is optional; it surfaces table errors early.
pub fn init() -> Result<()> {
    let table = PropertyTable::bundled()?;
    log::debug!(
        "grapheme tables ready: Unicode {}, {} ranges",
        table.version(),
        table.range_count()
    );
    Ok(())
}

/// Split `text` into extended grapheme clusters with the default configuration
pub fn segment(text: &str) -> Result<Vec<&str>> {
    Segmenter::new()?.segment(text)
}

/// Count the extended grapheme clusters in `text`
pub fn count(text: &str) -> Result<usize> {
    Segmenter::new()?.count(text)
}

/// Longest prefix of `text` holding at most `max_clusters` clusters
pub fn truncate(text: &str, max_clusters: usize) -> Result<&str> {
    Segmenter::new()?.truncate(text, max_clusters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        assert!(init().is_ok());
        assert!(init().is_ok());
    }

    #[test]
    fn test_convenience_functions() {
        assert_eq!(segment("\u{AC00}\u{11A8}a").unwrap(), vec!["\u{AC00}\u{11A8}", "a"]);
        assert_eq!(count("\u{1F1FA}\u{1F1F8}\u{1F1EB}\u{1F1F7}").unwrap(), 2);
        assert_eq!(truncate("a\u{308}bc", 2).unwrap(), "a\u{308}b");
    }

    #[test]
    fn test_table_version_matches_engine() {
        assert_eq!(tables::UCD_VERSION, UNICODE_VERSION);
    }
}
