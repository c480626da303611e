//! Carried context for the context-sensitive rules

use super::conjunct::ConjunctClusterMask;
use super::decision::{Decision, Rule};
use super::matrix::BreakMatrix;
use super::property::BreakProperty;

/// Left-to-right context needed by GB11 and GB12/13
///
/// Priority when deciding: conjunct mask, then emoji ZWJ, then regional
/// indicator pairing, then the chart.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScanState {
    prev: Option<BreakProperty>,
    /// Index of the most recent Extended_Pictographic code point
    emoji_anchor: Option<usize>,
    /// Every code point since the anchor, before the current one, is Extend
    extend_chain: bool,
    /// RI pairs seen in the current run of regional indicators
    regional_pairs: usize,
}

impl ScanState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Decide the boundary before code point `index`, then fold it into the
    /// state. Returns `None` for the first code point.
    pub(crate) fn step(
        &mut self,
        index: usize,
        curr: BreakProperty,
        mask: &ConjunctClusterMask,
        matrix: &BreakMatrix,
    ) -> Option<(Decision, Rule)> {
        let outcome = self
            .prev
            .map(|prev| self.decide(index, prev, curr, mask, matrix));
        self.advance(index, curr);
        outcome
    }

    fn decide(
        &mut self,
        index: usize,
        prev: BreakProperty,
        curr: BreakProperty,
        mask: &ConjunctClusterMask,
        matrix: &BreakMatrix,
    ) -> (Decision, Rule) {
        use BreakProperty::*;

        if mask.suppresses(index) {
            return (Decision::NoBreak, Rule::ConjunctLinker);
        }
        match (prev, curr) {
            (ZWJ, ExtendedPictographic) => {
                let joined = self.emoji_anchor.is_some() && self.extend_chain;
                (Decision::from_permitted(!joined), Rule::EmojiZwj)
            }
            (RegionalIndicator, RegionalIndicator) => {
                self.regional_pairs += 1;
                (
                    Decision::from_permitted(self.regional_pairs % 2 == 0),
                    Rule::RegionalIndicator,
                )
            }
            _ => (matrix.decide(prev, curr), Rule::Matrix),
        }
    }

    fn advance(&mut self, index: usize, curr: BreakProperty) {
        // prev sits at index - 1; only code points after the anchor count
        if let (Some(prev), Some(anchor)) = (self.prev, self.emoji_anchor) {
            if anchor + 1 < index {
                self.extend_chain &= prev == BreakProperty::Extend;
            }
        }
        if curr == BreakProperty::ExtendedPictographic {
            self.emoji_anchor = Some(index);
            self.extend_chain = true;
        }
        if curr != BreakProperty::RegionalIndicator {
            self.regional_pairs = 0;
        }
        self.prev = Some(curr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BreakProperty::*;

    fn run(properties: &[BreakProperty]) -> Vec<(Decision, Rule)> {
        let mask = ConjunctClusterMask::new();
        let mut state = ScanState::new();
        properties
            .iter()
            .enumerate()
            .filter_map(|(i, &p)| state.step(i, p, &mask, BreakMatrix::global()))
            .collect()
    }

    fn breaks(properties: &[BreakProperty]) -> Vec<bool> {
        run(properties).iter().map(|(d, _)| d.is_break()).collect()
    }

    #[test]
    fn test_first_code_point_has_no_decision() {
        assert!(run(&[Other]).is_empty());
        assert_eq!(run(&[Other, Other]).len(), 1);
    }

    #[test]
    fn test_emoji_zwj_sequence() {
        assert_eq!(
            breaks(&[ExtendedPictographic, Extend, Extend, ZWJ, ExtendedPictographic]),
            vec![false, false, false, false]
        );
        assert_eq!(run(&[ExtendedPictographic, ZWJ, ExtendedPictographic])[1].1, Rule::EmojiZwj);
    }

    #[test]
    fn test_zwj_without_pictographic_anchor() {
        assert_eq!(breaks(&[Other, ZWJ, ExtendedPictographic]), vec![false, true]);
    }

    #[test]
    fn test_non_extend_breaks_chain() {
        assert_eq!(
            breaks(&[ExtendedPictographic, SpacingMark, ZWJ, ExtendedPictographic]),
            vec![false, false, true]
        );
        assert_eq!(
            breaks(&[ExtendedPictographic, ZWJ, ZWJ, ExtendedPictographic]),
            vec![false, false, true]
        );
    }

    #[test]
    fn test_chain_restarts_at_each_pictographic() {
        assert_eq!(
            breaks(&[
                ExtendedPictographic,
                ZWJ,
                ExtendedPictographic,
                ZWJ,
                ExtendedPictographic
            ]),
            vec![false, false, false, false]
        );
    }

    #[test]
    fn test_regional_indicator_pairs() {
        use Decision::*;
        let decisions: Vec<Decision> = run(&[
            RegionalIndicator,
            RegionalIndicator,
            RegionalIndicator,
            RegionalIndicator,
            RegionalIndicator,
        ])
        .into_iter()
        .map(|(d, _)| d)
        .collect();
        assert_eq!(decisions, vec![NoBreak, Break, NoBreak, Break]);
    }

    #[test]
    fn test_regional_indicator_run_resets() {
        assert_eq!(
            breaks(&[
                RegionalIndicator,
                RegionalIndicator,
                Other,
                RegionalIndicator,
                RegionalIndicator,
                RegionalIndicator
            ]),
            vec![false, true, true, false, true]
        );
        // An odd run followed by a fresh run still pairs from its start
        assert_eq!(
            breaks(&[
                RegionalIndicator,
                Other,
                RegionalIndicator,
                RegionalIndicator
            ]),
            vec![true, true, false]
        );
    }

    #[test]
    fn test_conjunct_mask_takes_priority() {
        let mask = crate::domain::conjunct::ConjunctScanner::scan([
            crate::domain::conjunct::ConjunctClass::LinkingConsonant,
            crate::domain::conjunct::ConjunctClass::ConjunctLinker,
            crate::domain::conjunct::ConjunctClass::LinkingConsonant,
        ]);
        let mut state = ScanState::new();
        let matrix = BreakMatrix::global();
        assert_eq!(state.step(0, Other, &mask, matrix), None);
        assert_eq!(
            state.step(1, Extend, &mask, matrix),
            Some((Decision::NoBreak, Rule::ConjunctLinker))
        );
        assert_eq!(
            state.step(2, Other, &mask, matrix),
            Some((Decision::NoBreak, Rule::ConjunctLinker))
        );
    }
}
