//! Structural properties that hold for any input

use proptest::prelude::*;
use uegc_core::{Segmenter, SegmenterConfig};

/// Strings biased towards code points with interesting break properties
fn grapheme_soup() -> impl Strategy<Value = String> {
    let interesting = prop::sample::select(vec![
        'a', ' ', '\r', '\n', '\0', '\u{301}', '\u{308}', '\u{200D}', '\u{FE0F}', '\u{1F1E6}',
        '\u{1F1FA}', '\u{600}', '\u{903}', '\u{1100}', '\u{1161}', '\u{11A8}', '\u{AC00}',
        '\u{AC01}', '\u{1F468}', '\u{1F3FD}', '\u{A9}', '\u{915}', '\u{937}', '\u{94D}',
        '\u{93C}', '\u{BCD}', '日',
    ]);
    let any = any::<char>();
    prop::collection::vec(prop_oneof![3 => interesting, 1 => any], 0..40)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn clusters_partition_the_input(text in grapheme_soup()) {
        let clusters = Segmenter::new().unwrap().segment(&text).unwrap();
        prop_assert_eq!(clusters.concat(), text.clone());
        prop_assert!(clusters.iter().all(|cluster| !cluster.is_empty()));
    }

    #[test]
    fn boundaries_are_strictly_increasing(text in grapheme_soup()) {
        let boundaries = Segmenter::new().unwrap().boundaries(&text).unwrap();
        let offsets = boundaries.offsets();
        prop_assert_eq!(offsets[0], 0);
        prop_assert_eq!(*offsets.last().unwrap(), text.len());
        prop_assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(offsets.iter().all(|&offset| text.is_char_boundary(offset)));
    }

    #[test]
    fn segmentation_is_deterministic(text in grapheme_soup()) {
        let segmenter = Segmenter::new().unwrap();
        prop_assert_eq!(segmenter.segment(&text).unwrap(), segmenter.segment(&text).unwrap());
    }

    #[test]
    fn count_and_truncate_agree_with_segment(text in grapheme_soup(), limit in 0usize..50) {
        let segmenter = Segmenter::new().unwrap();
        let clusters = segmenter.segment(&text).unwrap();
        prop_assert_eq!(segmenter.count(&text).unwrap(), clusters.len());

        let truncated = segmenter.truncate(&text, limit).unwrap();
        let expected: String = clusters.iter().take(limit).copied().collect();
        prop_assert_eq!(truncated, expected.as_str());
    }

    #[test]
    fn fast_path_does_not_change_results(text in "[a-z 0-9\u{4E00}-\u{4E20}]{0,60}") {
        let fast = Segmenter::new().unwrap();
        let slow = Segmenter::with_config(
            SegmenterConfig::builder().all_other_fast_path(false).build().unwrap(),
        )
        .unwrap();
        prop_assert_eq!(fast.segment(&text).unwrap(), slow.segment(&text).unwrap());
        prop_assert_eq!(fast.count(&text).unwrap(), text.chars().count());
    }

    #[test]
    fn explain_reports_one_decision_per_pair(text in grapheme_soup()) {
        let segmenter = Segmenter::new().unwrap();
        let decisions = segmenter.explain(&text).unwrap();
        prop_assert_eq!(decisions.len(), text.chars().count().saturating_sub(1));
        let breaks = decisions.iter().filter(|d| d.decision.is_break()).count();
        let expected_breaks = segmenter.count(&text).unwrap().saturating_sub(1);
        prop_assert_eq!(breaks, expected_breaks);
    }

    #[test]
    fn each_cluster_segments_to_itself(text in grapheme_soup()) {
        let segmenter = Segmenter::new().unwrap();
        for cluster in segmenter.segment(&text).unwrap() {
            prop_assert_eq!(segmenter.segment(cluster).unwrap(), vec![cluster]);
        }
    }
}
