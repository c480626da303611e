//! Code point lookup with an ASCII fast path
//!
//! The base `Grapheme_Cluster_Break` ranges and the `Extended_Pictographic`
//! overrides are merged once, so a lookup is a single array read for ASCII
//! and one binary search otherwise.

use super::{UcdData, UnicodeVersion};
use crate::domain::classifier::CodePointClassifier;
use crate::domain::property::BreakProperty;
use crate::error::{Result, SegmentError};
use std::cmp::Ordering;
use std::sync::OnceLock;

type Range = (u32, u32);

const MAX_CODE_POINT: u32 = 0x10FFFF;

static BUNDLED: OnceLock<Result<PropertyTable>> = OnceLock::new();

/// Code point classifier backed by compiled UCD ranges
#[derive(Debug, Clone)]
pub struct PropertyTable {
    version: UnicodeVersion,
    /// ASCII lookup table for code points 0-127
    ascii: [BreakProperty; 128],
    /// Merged base and pictographic ranges, sorted
    ranges: Vec<(u32, u32, BreakProperty)>,
    linking_consonants: Vec<Range>,
    conjunct_linkers: Vec<Range>,
    conjunct_extenders: Vec<Range>,
}

impl PropertyTable {
    /// Table built from the bundled extracts, on first use
    pub fn bundled() -> Result<&'static PropertyTable> {
        BUNDLED
            .get_or_init(|| Self::build(&UcdData::bundled()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Validate the extracts and build the lookup structures
    pub fn build(data: &UcdData<'_>) -> Result<Self> {
        if data.version != crate::UNICODE_VERSION {
            return Err(SegmentError::TableVersionMismatch {
                expected: crate::UNICODE_VERSION,
                found: data.version,
            });
        }

        check_property_ranges(data.grapheme_cluster_break)?;
        check_ranges("Extended_Pictographic", data.extended_pictographic)?;
        check_ranges("InCB=Consonant", data.linking_consonants)?;
        check_ranges("InCB=Linker", data.conjunct_linkers)?;
        check_ranges("InCB=Extend", data.conjunct_extenders)?;

        let ranges = merge_overrides(data.grapheme_cluster_break, data.extended_pictographic);

        let mut ascii = [BreakProperty::Other; 128];
        for &(start, end, property) in ranges.iter().take_while(|range| range.0 < 128) {
            for cp in start..=end.min(127) {
                ascii[cp as usize] = property;
            }
        }

        log::debug!(
            "built property table for Unicode {}: {} ranges, {} conjunct consonant ranges",
            data.version,
            ranges.len(),
            data.linking_consonants.len()
        );

        Ok(Self {
            version: data.version,
            ascii,
            ranges,
            linking_consonants: data.linking_consonants.to_vec(),
            conjunct_linkers: data.conjunct_linkers.to_vec(),
            conjunct_extenders: data.conjunct_extenders.to_vec(),
        })
    }

    /// Unicode version of the tables
    pub fn version(&self) -> UnicodeVersion {
        self.version
    }

    /// Number of merged property ranges
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Break property of `ch` - hot path
    #[inline]
    pub fn property_of(&self, ch: char) -> BreakProperty {
        if ch.is_ascii() {
            self.ascii[ch as usize]
        } else {
            let cp = ch as u32;
            self.ranges
                .binary_search_by(|&(start, end, _)| locate(start, end, cp))
                .map_or(BreakProperty::Other, |i| self.ranges[i].2)
        }
    }
}

impl CodePointClassifier for PropertyTable {
    #[inline]
    fn classify(&self, ch: char) -> BreakProperty {
        self.property_of(ch)
    }

    fn is_linking_consonant(&self, ch: char) -> bool {
        contains(&self.linking_consonants, ch)
    }

    fn is_conjunct_linker(&self, ch: char) -> bool {
        contains(&self.conjunct_linkers, ch)
    }

    fn is_conjunct_extender(&self, ch: char) -> bool {
        contains(&self.conjunct_extenders, ch)
    }
}

#[inline]
fn locate(start: u32, end: u32, cp: u32) -> Ordering {
    if end < cp {
        Ordering::Less
    } else if start > cp {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

fn contains(ranges: &[Range], ch: char) -> bool {
    if ranges.is_empty() {
        return false;
    }
    let cp = ch as u32;
    ranges
        .binary_search_by(|&(start, end)| locate(start, end, cp))
        .is_ok()
}

fn check_ranges(name: &str, ranges: &[Range]) -> Result<()> {
    let mut previous_end: Option<u32> = None;
    for (i, &(start, end)) in ranges.iter().enumerate() {
        if start > end || end > MAX_CODE_POINT {
            return Err(SegmentError::MalformedTable(format!(
                "{name}: range {i} ({start:04X}..{end:04X}) is not a valid code point range"
            )));
        }
        if previous_end.is_some_and(|prev| prev >= start) {
            return Err(SegmentError::MalformedTable(format!(
                "{name}: range {i} ({start:04X}..{end:04X}) is out of order or overlaps its predecessor"
            )));
        }
        previous_end = Some(end);
    }
    Ok(())
}

fn check_property_ranges(ranges: &[(u32, u32, BreakProperty)]) -> Result<()> {
    if let Some(&(start, _, property)) = ranges.iter().find(|range| {
        matches!(
            range.2,
            BreakProperty::Other | BreakProperty::ExtendedPictographic
        )
    }) {
        return Err(SegmentError::MalformedTable(format!(
            "Grapheme_Cluster_Break: {property} at {start:04X} is not a base property value"
        )));
    }
    let bare: Vec<Range> = ranges.iter().map(|&(start, end, _)| (start, end)).collect();
    check_ranges("Grapheme_Cluster_Break", &bare)
}

/// Overlay `Extended_Pictographic` ranges on the base ranges
fn merge_overrides(
    base: &[(u32, u32, BreakProperty)],
    overrides: &[Range],
) -> Vec<(u32, u32, BreakProperty)> {
    let mut merged = Vec::with_capacity(base.len() + overrides.len());

    for &(start, end, property) in base {
        let mut cursor = start;
        let first = overrides.partition_point(|&(_, o_end)| o_end < start);
        for &(o_start, o_end) in overrides[first..].iter().take_while(|r| r.0 <= end) {
            if o_start > cursor {
                merged.push((cursor, o_start - 1, property));
            }
            cursor = o_end + 1;
            if cursor > end {
                break;
            }
        }
        if cursor <= end {
            merged.push((cursor, end, property));
        }
    }

    merged.extend(
        overrides
            .iter()
            .map(|&(start, end)| (start, end, BreakProperty::ExtendedPictographic)),
    );
    merged.sort_unstable_by_key(|range| range.0);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conjunct::ConjunctClass;
    use BreakProperty::*;

    fn table() -> &'static PropertyTable {
        PropertyTable::bundled().expect("bundled tables")
    }

    fn data_with<'a>(
        grapheme_cluster_break: &'a [(u32, u32, BreakProperty)],
        extended_pictographic: &'a [Range],
    ) -> UcdData<'a> {
        UcdData {
            version: crate::UNICODE_VERSION,
            grapheme_cluster_break,
            extended_pictographic,
            linking_consonants: &[],
            conjunct_linkers: &[],
            conjunct_extenders: &[],
        }
    }

    #[test]
    fn test_ascii_properties() {
        let table = table();
        assert_eq!(table.classify('a'), Other);
        assert_eq!(table.classify(' '), Other);
        assert_eq!(table.classify('\r'), CR);
        assert_eq!(table.classify('\n'), LF);
        assert_eq!(table.classify('\0'), Control);
        assert_eq!(table.classify('\u{7F}'), Control);
    }

    #[test]
    fn test_non_ascii_properties() {
        let table = table();
        assert_eq!(table.classify('\u{301}'), Extend);
        assert_eq!(table.classify('\u{200D}'), ZWJ);
        assert_eq!(table.classify('\u{1F1FA}'), RegionalIndicator);
        assert_eq!(table.classify('\u{600}'), Prepend);
        assert_eq!(table.classify('\u{903}'), SpacingMark);
        assert_eq!(table.classify('\u{1100}'), L);
        assert_eq!(table.classify('\u{1161}'), V);
        assert_eq!(table.classify('\u{11A8}'), T);
        assert_eq!(table.classify('\u{AC00}'), LV);
        assert_eq!(table.classify('\u{AC01}'), LVT);
        assert_eq!(table.classify('\u{1F600}'), ExtendedPictographic);
        assert_eq!(table.classify('\u{A9}'), ExtendedPictographic);
        assert_eq!(table.classify('日'), Other);
    }

    #[test]
    fn test_conjunct_classes() {
        let table = table();
        assert_eq!(table.conjunct_class('\u{915}'), ConjunctClass::LinkingConsonant);
        assert_eq!(table.conjunct_class('\u{94D}'), ConjunctClass::ConjunctLinker);
        assert_eq!(table.conjunct_class('\u{93C}'), ConjunctClass::ExtendOrLinker);
        assert_eq!(table.conjunct_class('\u{200D}'), ConjunctClass::ExtendOrLinker);
        assert_eq!(table.conjunct_class('a'), ConjunctClass::Other);
        // Tamil pulli is not a conjunct linker
        assert_ne!(table.conjunct_class('\u{BCD}'), ConjunctClass::ConjunctLinker);
    }

    #[test]
    fn test_bundled_is_shared() {
        let first = PropertyTable::bundled().expect("bundled tables");
        let second = PropertyTable::bundled().expect("bundled tables");
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.version(), crate::UNICODE_VERSION);
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let mut data = UcdData::bundled();
        data.version = UnicodeVersion::new(16, 0, 0);
        assert_eq!(
            PropertyTable::build(&data).err(),
            Some(SegmentError::TableVersionMismatch {
                expected: crate::UNICODE_VERSION,
                found: UnicodeVersion::new(16, 0, 0),
            })
        );
    }

    #[test]
    fn test_malformed_ranges_rejected() {
        let unsorted = [(0x20, 0x30, Extend), (0x10, 0x12, Extend)];
        assert!(matches!(
            PropertyTable::build(&data_with(&unsorted, &[])),
            Err(SegmentError::MalformedTable(_))
        ));

        let inverted = [(0x30, 0x20, Extend)];
        assert!(matches!(
            PropertyTable::build(&data_with(&inverted, &[])),
            Err(SegmentError::MalformedTable(_))
        ));

        let beyond = [(0x10FFFF, 0x110000)];
        assert!(matches!(
            PropertyTable::build(&data_with(&[], &beyond)),
            Err(SegmentError::MalformedTable(_))
        ));

        let derived_value = [(0x20, 0x30, ExtendedPictographic)];
        assert!(matches!(
            PropertyTable::build(&data_with(&derived_value, &[])),
            Err(SegmentError::MalformedTable(_))
        ));
    }

    #[test]
    fn test_pictographic_override_splits_base_range() {
        let base = [(0x100, 0x1FF, Control)];
        let overrides = [(0x0F0, 0x105), (0x150, 0x150), (0x1F0, 0x200)];
        let table = PropertyTable::build(&data_with(&base, &overrides)).expect("valid data");
        let at = |cp: u32| table.classify(char::from_u32(cp).expect("scalar"));

        assert_eq!(at(0x0EF), Other);
        assert_eq!(at(0x0F0), ExtendedPictographic);
        assert_eq!(at(0x105), ExtendedPictographic);
        assert_eq!(at(0x106), Control);
        assert_eq!(at(0x14F), Control);
        assert_eq!(at(0x150), ExtendedPictographic);
        assert_eq!(at(0x151), Control);
        assert_eq!(at(0x1EF), Control);
        assert_eq!(at(0x1F5), ExtendedPictographic);
        assert_eq!(at(0x200), ExtendedPictographic);
        assert_eq!(at(0x201), Other);
    }
}
