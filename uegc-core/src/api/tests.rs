use super::*;
use crate::domain::decision::{Decision, Rule};
use crate::domain::property::BreakProperty;
use crate::error::SegmentError;

fn segmenter() -> Segmenter {
    Segmenter::new().unwrap()
}

#[test]
fn test_segment_mixed_text() {
    let text = "a\r\n\u{1F1FA}\u{1F1F8}\u{1F468}\u{200D}\u{1F469}";
    assert_eq!(
        segmenter().segment(text).unwrap(),
        vec![
            "a",
            "\r\n",
            "\u{1F1FA}\u{1F1F8}",
            "\u{1F468}\u{200D}\u{1F469}"
        ]
    );
}

#[test]
fn test_empty_input_policies() {
    assert_eq!(segmenter().segment("").unwrap(), Vec::<&str>::new());
    assert_eq!(segmenter().count("").unwrap(), 0);
    assert_eq!(segmenter().boundaries("").unwrap().offsets(), &[0]);

    let strict = Segmenter::with_config(SegmenterConfig::strict()).unwrap();
    assert_eq!(strict.segment(""), Err(SegmentError::EmptyInput));
    assert_eq!(strict.count(""), Err(SegmentError::EmptyInput));
    assert_eq!(strict.explain("").err(), Some(SegmentError::EmptyInput));
    assert_eq!(strict.segment("a").unwrap(), vec!["a"]);
}

#[test]
fn test_cluster_indices() {
    let text = "ab\u{301}c";
    assert_eq!(
        segmenter().cluster_indices(text).unwrap(),
        vec![(0, "a"), (1, "b\u{301}"), (4, "c")]
    );
}

#[test]
fn test_count_and_truncate() {
    let text = "e\u{301}le\u{300}ve";
    let segmenter = segmenter();
    assert_eq!(segmenter.count(text).unwrap(), 5);
    assert_eq!(segmenter.truncate(text, 0).unwrap(), "");
    assert_eq!(segmenter.truncate(text, 1).unwrap(), "e\u{301}");
    assert_eq!(segmenter.truncate(text, 3).unwrap(), "e\u{301}le\u{300}");
    assert_eq!(segmenter.truncate(text, 99).unwrap(), text);
    assert_eq!(segmenter.truncate("", 3).unwrap(), "");
}

#[test]
fn test_graphemes_iterator() {
    let collected: Vec<&str> = segmenter()
        .graphemes("\u{1100}\u{1161}\u{11A8}x")
        .unwrap()
        .collect();
    assert_eq!(collected, vec!["\u{1100}\u{1161}\u{11A8}", "x"]);
}

#[test]
fn test_explain_reports_rules() {
    let decisions = segmenter()
        .explain("\u{1F1FA}\u{1F1F8}\u{1F1EB}")
        .unwrap();
    assert_eq!(decisions.len(), 2);
    assert_eq!(decisions[0].decision, Decision::NoBreak);
    assert_eq!(decisions[0].rule, Rule::RegionalIndicator);
    assert_eq!(decisions[1].decision, Decision::Break);
    assert_eq!(decisions[1].byte_offset, 8);
    assert_eq!(decisions[1].char_offset, 2);
    assert_eq!(decisions[1].prev, BreakProperty::RegionalIndicator);
}

#[test]
fn test_segment_code_points() {
    let clusters = segmenter()
        .segment_code_points(&[0x0915, 0x094D, 0x0937, 0x093F, 0x0061])
        .unwrap();
    assert_eq!(clusters, vec!["\u{915}\u{94D}\u{937}\u{93F}", "a"]);
}

#[test]
fn test_segment_code_points_rejects_surrogates() {
    assert_eq!(
        segmenter().segment_code_points(&[0x61, 0xD800]),
        Err(SegmentError::InvalidInput {
            position: 1,
            reason: "U+D800 is not a Unicode scalar value".to_string(),
        })
    );
    assert!(matches!(
        segmenter().segment_code_points(&[0x110000]),
        Err(SegmentError::InvalidInput { position: 0, .. })
    ));
}

#[test]
fn test_string_from_code_points() {
    assert_eq!(
        string_from_code_points(&[0x915, 0x94D, 0x937]).unwrap(),
        "\u{915}\u{94D}\u{937}"
    );
    assert_eq!(string_from_code_points(&[]).unwrap(), "");
    assert!(matches!(
        string_from_code_points(&[0x61, 0x62, 0xDFFF]),
        Err(SegmentError::InvalidInput { position: 2, .. })
    ));
}

#[test]
fn test_segment_utf8() {
    let bytes = "a\u{308}b".as_bytes();
    assert_eq!(segmenter().segment_utf8(bytes).unwrap(), vec!["a\u{308}", "b"]);

    let invalid = [b'a', b'b', 0xFF, b'c'];
    assert!(matches!(
        segmenter().segment_utf8(&invalid),
        Err(SegmentError::InvalidInput { position: 2, .. })
    ));
}

#[test]
fn test_clusters_stats() {
    let segmentation = segmenter()
        .clusters("\u{1F469}\u{1F3FD}\u{200D}\u{1F4BB}!")
        .unwrap();
    assert_eq!(segmentation.len(), 2);
    assert_eq!(segmentation.stats.longest_cluster, 4);
    assert_eq!(segmentation.clusters[1].char_offset, 4);
}

#[test]
fn test_fast_path_toggle_agrees() {
    let text = "plain ascii text with no marks";
    let slow = SegmenterConfig::builder()
        .all_other_fast_path(false)
        .build_segmenter()
        .unwrap();
    assert_eq!(slow.segment(text).unwrap(), segmenter().segment(text).unwrap());
}

#[test]
fn test_segmenter_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Segmenter>();

    let segmenter = segmenter();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(segmenter.count("\u{1F1FA}\u{1F1F8}ab").unwrap(), 3));
        }
    });
}
