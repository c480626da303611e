//! Property tables compiled from the Unicode Character Database

mod property_table;
pub mod ucd;

pub use property_table::PropertyTable;
pub use ucd::UCD_VERSION;

use crate::domain::property::BreakProperty;
use crate::error::SegmentError;
use std::fmt;
use std::str::FromStr;

/// A Unicode version triple such as `17.0.0`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnicodeVersion {
    /// Major version
    pub major: u8,
    /// Minor version
    pub minor: u8,
    /// Update version
    pub update: u8,
}

impl UnicodeVersion {
    /// Create a version triple
    pub const fn new(major: u8, minor: u8, update: u8) -> Self {
        Self {
            major,
            minor,
            update,
        }
    }
}

impl fmt::Display for UnicodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.update)
    }
}

impl FromStr for UnicodeVersion {
    type Err = SegmentError;

    /// Parse `major.minor[.update]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SegmentError::Configuration(format!("invalid Unicode version: {s}"));
        let mut parts = s.trim().split('.');
        let mut next = |required: bool| -> Result<u8, SegmentError> {
            match parts.next() {
                Some(part) => part.parse().map_err(|_| invalid()),
                None if required => Err(invalid()),
                None => Ok(0),
            }
        };
        let version = Self::new(next(true)?, next(true)?, next(false)?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}

/// Borrowed view of compiled UCD extracts, the input to [`PropertyTable::build`]
///
/// Ranges are inclusive `(first, last)` code point pairs, sorted and
/// non-overlapping within each list.
#[derive(Clone, Copy, Debug)]
pub struct UcdData<'a> {
    /// Unicode version the extracts come from
    pub version: UnicodeVersion,
    /// Base `Grapheme_Cluster_Break` ranges; unlisted code points are `Other`
    pub grapheme_cluster_break: &'a [(u32, u32, BreakProperty)],
    /// `Extended_Pictographic=Yes` ranges, overriding the base value
    pub extended_pictographic: &'a [(u32, u32)],
    /// `Indic_Conjunct_Break=Consonant`
    pub linking_consonants: &'a [(u32, u32)],
    /// `Indic_Conjunct_Break=Linker`
    pub conjunct_linkers: &'a [(u32, u32)],
    /// `Indic_Conjunct_Break=Extend`
    pub conjunct_extenders: &'a [(u32, u32)],
}

impl UcdData<'static> {
    /// Extracts compiled into this crate
    pub fn bundled() -> Self {
        Self {
            version: ucd::UCD_VERSION,
            grapheme_cluster_break: ucd::GRAPHEME_CLUSTER_BREAK,
            extended_pictographic: ucd::EXTENDED_PICTOGRAPHIC,
            linking_consonants: ucd::INCB_CONSONANT,
            conjunct_linkers: ucd::INCB_LINKER,
            conjunct_extenders: ucd::INCB_EXTEND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_display_and_parse() {
        let version = UnicodeVersion::new(17, 0, 0);
        assert_eq!(version.to_string(), "17.0.0");
        assert_eq!("17.0.0".parse::<UnicodeVersion>(), Ok(version));
        assert_eq!("17.0".parse::<UnicodeVersion>(), Ok(version));
        assert!("17".parse::<UnicodeVersion>().is_err());
        assert!("17.0.0.1".parse::<UnicodeVersion>().is_err());
        assert!("seventeen".parse::<UnicodeVersion>().is_err());
    }

    #[test]
    fn test_version_ordering() {
        assert!(UnicodeVersion::new(16, 0, 0) < UnicodeVersion::new(17, 0, 0));
        assert!(UnicodeVersion::new(15, 1, 0) > UnicodeVersion::new(15, 0, 0));
    }

    #[test]
    fn test_bundled_data_version() {
        assert_eq!(UcdData::bundled().version, crate::UNICODE_VERSION);
        assert!(!UcdData::bundled().grapheme_cluster_break.is_empty());
    }
}
