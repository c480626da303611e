//! Indic conjunct cluster detection (GB9c)
//!
//! A conjunct is a linking consonant, any run of extenders and conjunct
//! linkers containing at least one linker, and a following linking
//! consonant. Chains such as `C L C L C` form a single protected span.

use smallvec::SmallVec;

/// Indic_Conjunct_Break class of a code point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConjunctClass {
    /// `InCB=Consonant`
    LinkingConsonant,
    /// `InCB=Extend` (combining marks and ZWJ that may sit inside a conjunct)
    ExtendOrLinker,
    /// `InCB=Linker` (virama-like characters)
    ConjunctLinker,
    /// Anything else
    Other,
}

/// Code point positions `start..=end` of one conjunct cluster
///
/// `start` is the first consonant and `end` the consonant after the last
/// linker run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConjunctSpan {
    /// Index of the first linking consonant
    pub start: usize,
    /// Index of the closing linking consonant
    pub end: usize,
}

/// Positions whose preceding boundary is suppressed by GB9c
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConjunctClusterMask {
    spans: SmallVec<[ConjunctSpan; 4]>,
}

impl ConjunctClusterMask {
    /// Mask with no protected positions
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no conjunct was found
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Detected spans in text order
    pub fn spans(&self) -> &[ConjunctSpan] {
        &self.spans
    }

    /// Whether the break before code point `index` is suppressed
    pub fn suppresses(&self, index: usize) -> bool {
        let candidate = self.spans.partition_point(|span| span.end < index);
        self.spans
            .get(candidate)
            .is_some_and(|span| span.start < index)
    }

    fn close(&mut self, span: ConjunctSpan) {
        match self.spans.last_mut() {
            // C L C L C reported as two spans sharing a consonant
            Some(last) if last.end == span.start => last.end = span.end,
            _ => self.spans.push(span),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanPhase {
    Idle,
    Consonant { start: usize },
    Linked { start: usize },
}

/// Forward scanner building a [`ConjunctClusterMask`]
#[derive(Debug, Clone)]
pub struct ConjunctScanner {
    phase: ScanPhase,
    mask: ConjunctClusterMask,
}

impl Default for ConjunctScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ConjunctScanner {
    /// Scanner in the idle state
    pub fn new() -> Self {
        Self {
            phase: ScanPhase::Idle,
            mask: ConjunctClusterMask::new(),
        }
    }

    /// Feed the class of code point `index`. Indices must be consecutive.
    pub fn step(&mut self, index: usize, class: ConjunctClass) {
        use ConjunctClass::*;

        self.phase = match (self.phase, class) {
            (ScanPhase::Linked { start }, LinkingConsonant) => {
                self.mask.close(ConjunctSpan { start, end: index });
                ScanPhase::Consonant { start: index }
            }
            (_, LinkingConsonant) => ScanPhase::Consonant { start: index },
            (ScanPhase::Consonant { start } | ScanPhase::Linked { start }, ConjunctLinker) => {
                ScanPhase::Linked { start }
            }
            (phase @ (ScanPhase::Consonant { .. } | ScanPhase::Linked { .. }), ExtendOrLinker) => {
                phase
            }
            _ => ScanPhase::Idle,
        };
    }

    /// Stop scanning; an open consonant or linker run is discarded
    pub fn finish(self) -> ConjunctClusterMask {
        self.mask
    }

    /// Scan a whole sequence of classes
    pub fn scan<I>(classes: I) -> ConjunctClusterMask
    where
        I: IntoIterator<Item = ConjunctClass>,
    {
        let mut scanner = Self::new();
        for (index, class) in classes.into_iter().enumerate() {
            scanner.step(index, class);
        }
        scanner.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ConjunctClass::*;
    use super::*;

    fn protected(mask: &ConjunctClusterMask, len: usize) -> Vec<usize> {
        (0..len).filter(|&i| mask.suppresses(i)).collect()
    }

    #[test]
    fn test_simple_conjunct() {
        // क ् ष
        let mask = ConjunctScanner::scan([LinkingConsonant, ConjunctLinker, LinkingConsonant]);
        assert_eq!(mask.spans(), &[ConjunctSpan { start: 0, end: 2 }]);
        assert_eq!(protected(&mask, 3), vec![1, 2]);
    }

    #[test]
    fn test_extenders_around_linker() {
        // क ़ ् ZWJ ष
        let mask = ConjunctScanner::scan([
            LinkingConsonant,
            ExtendOrLinker,
            ConjunctLinker,
            ExtendOrLinker,
            LinkingConsonant,
        ]);
        assert_eq!(protected(&mask, 5), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_chained_conjuncts_merge() {
        let mask = ConjunctScanner::scan([
            LinkingConsonant,
            ConjunctLinker,
            LinkingConsonant,
            ConjunctLinker,
            LinkingConsonant,
        ]);
        assert_eq!(mask.spans(), &[ConjunctSpan { start: 0, end: 4 }]);
        assert_eq!(protected(&mask, 5), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_no_linker_no_span() {
        let mask = ConjunctScanner::scan([LinkingConsonant, ExtendOrLinker, LinkingConsonant]);
        assert!(mask.is_empty());
    }

    #[test]
    fn test_other_interrupts() {
        let mask = ConjunctScanner::scan([LinkingConsonant, ConjunctLinker, Other, LinkingConsonant]);
        assert!(mask.is_empty());
    }

    #[test]
    fn test_linker_without_consonant() {
        let mask = ConjunctScanner::scan([ConjunctLinker, LinkingConsonant, ConjunctLinker]);
        assert!(mask.is_empty());
        assert!(!mask.suppresses(0));
    }

    #[test]
    fn test_separate_spans() {
        let mask = ConjunctScanner::scan([
            LinkingConsonant,
            ConjunctLinker,
            LinkingConsonant,
            Other,
            LinkingConsonant,
            ConjunctLinker,
            LinkingConsonant,
        ]);
        assert_eq!(mask.spans().len(), 2);
        assert_eq!(protected(&mask, 7), vec![1, 2, 5, 6]);
    }
}
