//! Grapheme cluster break property values

use crate::error::SegmentError;
use std::fmt;
use std::str::FromStr;

/// Break property of a single code point
///
/// The declaration order is the row and column order of the break chart, so
/// [`BreakProperty::index`] addresses the break matrix directly.
#[allow(clippy::upper_case_acronyms)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BreakProperty {
    /// Any code point without a `Grapheme_Cluster_Break` value
    #[default]
    Other = 0,
    /// Carriage return (U+000D)
    CR,
    /// Line feed (U+000A)
    LF,
    /// Control and format characters
    Control,
    /// Combining marks and other extenders
    Extend,
    /// Regional indicator symbols (flag halves)
    RegionalIndicator,
    /// Prepended concatenation marks
    Prepend,
    /// Spacing combining marks
    SpacingMark,
    /// Hangul leading jamo
    L,
    /// Hangul vowel jamo
    V,
    /// Hangul trailing jamo
    T,
    /// Hangul LV syllable
    LV,
    /// Hangul LVT syllable
    LVT,
    /// `Extended_Pictographic` override (not a primary UCD value)
    ExtendedPictographic,
    /// Zero width joiner (U+200D)
    ZWJ,
}

impl BreakProperty {
    /// Number of property values
    pub const COUNT: usize = 15;

    /// All property values in chart order
    pub const ALL: [BreakProperty; Self::COUNT] = [
        Self::Other,
        Self::CR,
        Self::LF,
        Self::Control,
        Self::Extend,
        Self::RegionalIndicator,
        Self::Prepend,
        Self::SpacingMark,
        Self::L,
        Self::V,
        Self::T,
        Self::LV,
        Self::LVT,
        Self::ExtendedPictographic,
        Self::ZWJ,
    ];

    /// Row/column of this value in the break chart
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Spelling used by the Unicode Character Database
    pub const fn ucd_name(self) -> &'static str {
        match self {
            Self::Other => "Other",
            Self::CR => "CR",
            Self::LF => "LF",
            Self::Control => "Control",
            Self::Extend => "Extend",
            Self::RegionalIndicator => "Regional_Indicator",
            Self::Prepend => "Prepend",
            Self::SpacingMark => "SpacingMark",
            Self::L => "L",
            Self::V => "V",
            Self::T => "T",
            Self::LV => "LV",
            Self::LVT => "LVT",
            Self::ExtendedPictographic => "Extended_Pictographic",
            Self::ZWJ => "ZWJ",
        }
    }

    /// CR, LF or Control
    #[inline]
    pub const fn is_control_like(self) -> bool {
        matches!(self, Self::CR | Self::LF | Self::Control)
    }
}

impl fmt::Display for BreakProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ucd_name())
    }
}

impl FromStr for BreakProperty {
    type Err = SegmentError;

    /// Parse a UCD property value name. `Any` and `XX` are accepted for `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if matches!(name, "Any" | "XX") {
            return Ok(Self::Other);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|property| property.ucd_name() == name)
            .ok_or_else(|| SegmentError::UnknownProperty(name.to_string()))
    }
}
