//! Single-pass grapheme boundary scanner
//!
//! The scanner classifies every code point once, runs the conjunct
//! pre-pass, then walks adjacent pairs left to right. Each decision is
//! reported to an observer callback before the boundary is recorded.

use super::boundary::Boundaries;
use super::classifier::CodePointClassifier;
use super::conjunct::{ConjunctClusterMask, ConjunctScanner};
use super::decision::{BreakDecision, Decision, Rule};
use super::matrix::BreakMatrix;
use super::property::BreakProperty;
use super::state::ScanState;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
struct Classified {
    offset: usize,
    ch: char,
    property: BreakProperty,
}

/// Boundary scanner over a code point classifier
#[derive(Debug)]
pub struct Scanner<'c, C: CodePointClassifier + ?Sized> {
    classifier: &'c C,
    matrix: &'static BreakMatrix,
    all_other_fast_path: bool,
}

impl<C: CodePointClassifier + ?Sized> Clone for Scanner<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: CodePointClassifier + ?Sized> Copy for Scanner<'_, C> {}

impl<'c, C: CodePointClassifier + ?Sized> Scanner<'c, C> {
    /// Scanner using the bundled break chart
    pub fn new(classifier: &'c C) -> Self {
        Self {
            classifier,
            matrix: BreakMatrix::global(),
            all_other_fast_path: true,
        }
    }

    /// Enable or disable the shortcut for text made only of `Other`
    pub fn with_fast_path(mut self, enabled: bool) -> Self {
        self.all_other_fast_path = enabled;
        self
    }

    /// Compute cluster boundaries of `text`
    pub fn scan(&self, text: &str) -> Boundaries {
        self.scan_with(text, |_| {})
    }

    /// Compute cluster boundaries, reporting every pair decision to `observe`
    pub fn scan_with<F>(&self, text: &str, mut observe: F) -> Boundaries
    where
        F: FnMut(&BreakDecision),
    {
        let classified: SmallVec<[Classified; 64]> = text
            .char_indices()
            .map(|(offset, ch)| Classified {
                offset,
                ch,
                property: self.classifier.classify(ch),
            })
            .collect();

        if classified.is_empty() {
            return Boundaries::empty();
        }

        let mut boundaries = Boundaries::with_capacity(classified.len());
        let mut record = |pair: &[Classified], char_offset: usize, decision: Decision, rule: Rule| {
            let reported = BreakDecision {
                byte_offset: pair[1].offset,
                char_offset,
                prev: pair[0].property,
                curr: pair[1].property,
                decision,
                rule,
            };
            log::trace!("{reported}");
            observe(&reported);
            if decision == Decision::Break {
                boundaries.push(pair[1].offset);
            }
        };

        let all_other = self.all_other_fast_path
            && classified
                .iter()
                .all(|cp| cp.property == BreakProperty::Other);

        if all_other {
            for (i, pair) in classified.windows(2).enumerate() {
                record(pair, i + 1, Decision::Break, Rule::AllOther);
            }
        } else {
            let mask = self.conjunct_mask(&classified);
            let mut state = ScanState::new();
            state.step(0, classified[0].property, &mask, self.matrix);
            for (i, pair) in classified.windows(2).enumerate() {
                let index = i + 1;
                if let Some((decision, rule)) =
                    state.step(index, pair[1].property, &mask, self.matrix)
                {
                    record(pair, index, decision, rule);
                }
            }
        }

        boundaries.finish(text.len())
    }

    fn conjunct_mask(&self, classified: &[Classified]) -> ConjunctClusterMask {
        let mask = ConjunctScanner::scan(
            classified
                .iter()
                .map(|cp| self.classifier.conjunct_class(cp.ch)),
        );
        if !mask.is_empty() {
            log::trace!("conjunct spans: {:?}", mask.spans());
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::PropertyTable;

    fn table() -> &'static PropertyTable {
        PropertyTable::bundled().expect("bundled tables")
    }

    fn clusters(text: &str) -> Vec<&str> {
        Scanner::new(table()).scan(text).slices(text).collect()
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(Scanner::new(table()).scan("").offsets(), &[0]);
    }

    #[test]
    fn test_combining_marks() {
        assert_eq!(
            clusters("e\u{301}le\u{300}ve"),
            vec!["e\u{301}", "l", "e\u{300}", "v", "e"]
        );
    }

    #[test]
    fn test_fast_path_matches_full_path() {
        let text = "日本語のテキスト";
        let fast = Scanner::new(table()).scan(text);
        let full = Scanner::new(table()).with_fast_path(false).scan(text);
        assert_eq!(fast, full);
        assert_eq!(fast.cluster_count(), text.chars().count());
    }

    #[test]
    fn test_fast_path_rule_reported() {
        let mut rules = Vec::new();
        Scanner::new(table()).scan_with("abc", |d| rules.push(d.rule));
        assert_eq!(rules, vec![Rule::AllOther, Rule::AllOther]);

        rules.clear();
        Scanner::new(table())
            .with_fast_path(false)
            .scan_with("abc", |d| rules.push(d.rule));
        assert_eq!(rules, vec![Rule::Matrix, Rule::Matrix]);
    }

    #[test]
    fn test_observer_sees_every_pair() {
        let text = "a\r\nb";
        let mut seen = Vec::new();
        let boundaries = Scanner::new(table()).scan_with(text, |d| seen.push(*d));
        assert_eq!(seen.len(), text.chars().count() - 1);
        assert_eq!(seen[1].prev, BreakProperty::CR);
        assert_eq!(seen[1].curr, BreakProperty::LF);
        assert_eq!(seen[1].decision, Decision::NoBreak);
        assert_eq!(boundaries.offsets(), &[0, 1, 3, 4]);
    }

    #[test]
    fn test_conjunct_reported_as_gb9c() {
        let mut rules = Vec::new();
        Scanner::new(table()).scan_with("\u{915}\u{94D}\u{937}", |d| rules.push(d.rule));
        assert_eq!(rules, vec![Rule::ConjunctLinker, Rule::ConjunctLinker]);
    }
}
