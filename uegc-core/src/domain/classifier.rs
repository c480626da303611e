//! Code point classification interface

use super::conjunct::ConjunctClass;
use super::property::BreakProperty;

/// Classification of code points for boundary detection
pub trait CodePointClassifier: Send + Sync {
    /// Break property of a code point, with the `Extended_Pictographic`
    /// override already applied
    fn classify(&self, ch: char) -> BreakProperty;

    /// Check if code point is an Indic linking consonant
    fn is_linking_consonant(&self, ch: char) -> bool;

    /// Check if code point is an Indic conjunct linker (virama)
    fn is_conjunct_linker(&self, ch: char) -> bool;

    /// Check if code point may appear between a consonant and a linker
    fn is_conjunct_extender(&self, ch: char) -> bool;

    /// Indic_Conjunct_Break class of a code point
    fn conjunct_class(&self, ch: char) -> ConjunctClass {
        if self.is_conjunct_linker(ch) {
            ConjunctClass::ConjunctLinker
        } else if self.is_linking_consonant(ch) {
            ConjunctClass::LinkingConsonant
        } else if self.is_conjunct_extender(ch) {
            ConjunctClass::ExtendOrLinker
        } else {
            ConjunctClass::Other
        }
    }
}
