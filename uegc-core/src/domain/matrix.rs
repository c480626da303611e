//! Pairwise break matrix for the context-free grapheme rules

use super::decision::Decision;
use super::property::BreakProperty;

const N: usize = BreakProperty::COUNT;

/// Grapheme cluster break chart, `1` = break permitted.
///
/// Rows are the previous code point's property and columns the current
/// one's, both in [`BreakProperty::ALL`] order. GB9c, GB11 and GB12/13
/// depend on context and are resolved by the scanner before this chart is
/// consulted.
#[rustfmt::skip]
const GCB_CHART: [[u8; N]; N] = [
    //Oth CR LF Ctl Ext RI Pre SpM  L  V  T LV LVT EP ZWJ
    [1,  1, 1, 1,  0,  1, 1,  0,  1, 1, 1, 1, 1,  1, 0], // Other
    [1,  1, 0, 1,  1,  1, 1,  1,  1, 1, 1, 1, 1,  1, 1], // CR
    [1,  1, 1, 1,  1,  1, 1,  1,  1, 1, 1, 1, 1,  1, 1], // LF
    [1,  1, 1, 1,  1,  1, 1,  1,  1, 1, 1, 1, 1,  1, 1], // Control
    [1,  1, 1, 1,  0,  1, 1,  0,  1, 1, 1, 1, 1,  1, 0], // Extend
    [1,  1, 1, 1,  0,  0, 1,  0,  1, 1, 1, 1, 1,  1, 0], // Regional_Indicator
    [0,  1, 1, 1,  0,  0, 0,  0,  0, 0, 0, 0, 0,  0, 0], // Prepend
    [1,  1, 1, 1,  0,  1, 1,  0,  1, 1, 1, 1, 1,  1, 0], // SpacingMark
    [1,  1, 1, 1,  0,  1, 1,  0,  0, 0, 1, 0, 0,  1, 0], // L
    [1,  1, 1, 1,  0,  1, 1,  0,  1, 0, 0, 1, 1,  1, 0], // V
    [1,  1, 1, 1,  0,  1, 1,  0,  1, 1, 0, 1, 1,  1, 0], // T
    [1,  1, 1, 1,  0,  1, 1,  0,  1, 0, 0, 1, 1,  1, 0], // LV
    [1,  1, 1, 1,  0,  1, 1,  0,  1, 1, 0, 1, 1,  1, 0], // LVT
    [1,  1, 1, 1,  0,  1, 1,  0,  1, 1, 1, 1, 1,  1, 0], // Extended_Pictographic
    [1,  1, 1, 1,  0,  1, 1,  0,  1, 1, 1, 1, 1,  1, 0], // ZWJ
];

/// The break chart compiled at build time
pub static BREAK_MATRIX: BreakMatrix = BreakMatrix::from_chart(&GCB_CHART);

/// 15×15 lookup of "break permitted" for every property pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakMatrix {
    cells: [[bool; N]; N],
}

impl BreakMatrix {
    /// Compile a 0/1 chart. Any other entry fails const evaluation.
    pub const fn from_chart(chart: &[[u8; N]; N]) -> Self {
        let mut cells = [[false; N]; N];
        let mut row = 0;
        while row < N {
            let mut col = 0;
            while col < N {
                cells[row][col] = match chart[row][col] {
                    0 => false,
                    1 => true,
                    _ => panic!("break chart entries must be 0 or 1"),
                };
                col += 1;
            }
            row += 1;
        }
        Self { cells }
    }

    /// The matrix for the bundled Unicode version
    pub fn global() -> &'static BreakMatrix {
        &BREAK_MATRIX
    }

    /// Whether the chart permits a break between `prev` and `curr`
    #[inline]
    pub fn permits_break(&self, prev: BreakProperty, curr: BreakProperty) -> bool {
        self.cells[prev.index()][curr.index()]
    }

    /// Chart decision between `prev` and `curr`
    #[inline]
    pub fn decide(&self, prev: BreakProperty, curr: BreakProperty) -> Decision {
        Decision::from_permitted(self.permits_break(prev, curr))
    }
}
