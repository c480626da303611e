//! Cluster shapes across scripts: Indic conjuncts, Hangul, emoji and flags

use uegc_core::{Boundaries, Segmenter};

fn clusters(code_points: &[u32]) -> Vec<Vec<u32>> {
    Segmenter::new()
        .unwrap()
        .segment_code_points(code_points)
        .unwrap()
        .iter()
        .map(|cluster| cluster.chars().map(u32::from).collect())
        .collect()
}

fn assert_single_cluster(code_points: &[u32]) {
    assert_eq!(clusters(code_points), vec![code_points.to_vec()]);
}

#[test]
fn test_devanagari_ksha_with_vowel_sign() {
    // क्षि
    assert_single_cluster(&[0x0915, 0x094D, 0x0937, 0x093F]);
}

#[test]
fn test_conjunct_with_zwj_after_virama() {
    assert_single_cluster(&[0x0915, 0x094D, 0x200D, 0x0937]);
}

#[test]
fn test_conjunct_with_nukta_before_virama() {
    assert_single_cluster(&[0x0915, 0x093C, 0x094D, 0x0937]);
}

#[test]
fn test_triple_consonant_conjunct() {
    // त्र preceded by क्
    assert_single_cluster(&[0x0915, 0x094D, 0x0924, 0x094D, 0x0930]);
}

#[test]
fn test_bengali_and_telugu_conjuncts() {
    assert_single_cluster(&[0x0995, 0x09CD, 0x09B7]);
    assert_single_cluster(&[0x0C15, 0x0C4D, 0x0C37]);
}

#[test]
fn test_virama_before_latin_letter() {
    assert_eq!(
        clusters(&[0x0915, 0x094D, 0x0061]),
        vec![vec![0x0915, 0x094D], vec![0x0061]]
    );
}

#[test]
fn test_tamil_pulli_does_not_link() {
    assert_eq!(
        clusters(&[0x0B95, 0x0BCD, 0x0BB7]),
        vec![vec![0x0B95, 0x0BCD], vec![0x0BB7]]
    );
}

#[test]
fn test_vowel_sign_ends_cluster() {
    assert_eq!(
        clusters(&[0x0915, 0x093E, 0x0937]),
        vec![vec![0x0915, 0x093E], vec![0x0937]]
    );
}

#[test]
fn test_spacing_mark_and_prepend() {
    assert_single_cluster(&[0x0915, 0x0903]);
    assert_single_cluster(&[0x0600, 0x0061]);
}

#[test]
fn test_hangul_syllables() {
    assert_single_cluster(&[0x1100, 0x1161, 0x11A8]);
    assert_single_cluster(&[0xAC00, 0x11A8]);
    assert_eq!(
        clusters(&[0xAC01, 0x1161]),
        vec![vec![0xAC01], vec![0x1161]]
    );
}

#[test]
fn test_emoji_modifier_and_zwj_sequence() {
    // woman technologist, medium skin tone
    assert_single_cluster(&[0x1F469, 0x1F3FD, 0x200D, 0x1F4BB]);
    // rainbow flag
    assert_single_cluster(&[0x1F3F3, 0xFE0F, 0x200D, 0x1F308]);
    // family
    assert_single_cluster(&[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466]);
}

#[test]
fn test_zwj_needs_pictographic_start() {
    assert_eq!(
        clusters(&[0x0061, 0x200D, 0x1F469]),
        vec![vec![0x0061, 0x200D], vec![0x1F469]]
    );
}

#[test]
fn test_double_zwj_breaks_sequence() {
    assert_eq!(
        clusters(&[0x1F468, 0x200D, 0x200D, 0x1F469]),
        vec![vec![0x1F468, 0x200D, 0x200D], vec![0x1F469]]
    );
}

#[test]
fn test_flags_pair_up() {
    assert_eq!(
        clusters(&[0x1F1FA, 0x1F1F8, 0x1F1EB, 0x1F1F7]),
        vec![vec![0x1F1FA, 0x1F1F8], vec![0x1F1EB, 0x1F1F7]]
    );
    assert_eq!(
        clusters(&[0x1F1FA, 0x0308, 0x1F1F8]),
        vec![vec![0x1F1FA, 0x0308], vec![0x1F1F8]]
    );
}

#[test]
fn test_regional_indicator_runs_pair_independently() {
    let ri = 0x1F1E6;
    assert_eq!(
        clusters(&[ri, ri, 0x61, ri, ri, ri]),
        vec![vec![ri, ri], vec![0x61], vec![ri, ri], vec![ri]]
    );
    assert_eq!(
        clusters(&[ri, 0x61, ri, ri]),
        vec![vec![ri], vec![0x61], vec![ri, ri]]
    );
}

#[test]
fn test_line_endings_and_controls() {
    assert_eq!(
        clusters(&[0x61, 0x0D, 0x0A, 0x62]),
        vec![vec![0x61], vec![0x0D, 0x0A], vec![0x62]]
    );
    assert_eq!(clusters(&[0x0A, 0x0D]), vec![vec![0x0A], vec![0x0D]]);
    assert_eq!(
        clusters(&[0x61, 0x00, 0x62]),
        vec![vec![0x61], vec![0x00], vec![0x62]]
    );
    // Combining mark after a control stays alone
    assert_eq!(
        clusters(&[0x0A, 0x0308]),
        vec![vec![0x0A], vec![0x0308]]
    );
}

#[test]
fn test_cjk_has_one_cluster_per_character() {
    assert_eq!(
        Segmenter::new().unwrap().segment("日本語").unwrap(),
        vec!["日", "本", "語"]
    );
}

#[test]
fn test_boundaries_of_mixed_script_line() {
    let text = "a\u{915}\u{94D}\u{937}\u{1F1EB}\u{1F1F7}";
    let boundaries: Boundaries = Segmenter::new().unwrap().boundaries(text).unwrap();
    assert_eq!(boundaries.offsets(), &[0, 1, 10, 18]);
    assert_eq!(boundaries.cluster_count(), 3);
    assert_eq!(
        boundaries.slices(text).collect::<Vec<_>>(),
        vec!["a", "\u{915}\u{94D}\u{937}", "\u{1F1EB}\u{1F1F7}"]
    );
}
