//! Boundary decisions and the rules that produce them

use super::property::BreakProperty;
use std::fmt;

/// Outcome of a boundary decision between two adjacent code points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// A cluster boundary is allowed here
    Break,
    /// The two code points belong to the same cluster
    NoBreak,
}

impl Decision {
    /// Create a decision from a "break permitted" flag
    #[inline]
    pub const fn from_permitted(permitted: bool) -> Self {
        if permitted {
            Self::Break
        } else {
            Self::NoBreak
        }
    }

    /// Whether this decision places a boundary
    #[inline]
    pub const fn is_break(self) -> bool {
        matches!(self, Self::Break)
    }

    /// The symbol used by the Unicode test files (`÷` or `×`)
    pub const fn symbol(self) -> char {
        match self {
            Self::Break => '÷',
            Self::NoBreak => '×',
        }
    }
}

/// The rule that decided a boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rule {
    /// GB9c: inside an Indic conjunct cluster
    ConjunctLinker,
    /// GB11: emoji ZWJ sequence
    EmojiZwj,
    /// GB12/GB13: regional indicator pairing
    RegionalIndicator,
    /// Context-free rules GB3-GB999 from the break chart
    Matrix,
    /// Input made only of `Other` code points (GB999 everywhere)
    AllOther,
}

impl Rule {
    /// Short UAX #29 label
    pub const fn label(self) -> &'static str {
        match self {
            Self::ConjunctLinker => "GB9c",
            Self::EmojiZwj => "GB11",
            Self::RegionalIndicator => "GB12/13",
            Self::Matrix => "chart",
            Self::AllOther => "GB999",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One decision between the code point before `byte_offset` and the one at it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakDecision {
    /// Byte offset of the current code point
    pub byte_offset: usize,
    /// Code point index of the current code point
    pub char_offset: usize,
    /// Property of the preceding code point
    pub prev: BreakProperty,
    /// Property of the current code point
    pub curr: BreakProperty,
    /// Break or no break
    pub decision: Decision,
    /// Rule that produced the decision
    pub rule: Rule,
}

impl fmt::Display for BreakDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6} {} {} {} [{}]",
            self.byte_offset,
            self.prev,
            self.decision.symbol(),
            self.curr,
            self.rule
        )
    }
}
