//! Segmentation domain: break properties, rules and the boundary scanner

pub mod boundary;
pub mod classifier;
pub mod conjunct;
pub mod decision;
pub mod matrix;
pub mod property;
pub mod scanner;
mod state;

pub use boundary::Boundaries;
pub use classifier::CodePointClassifier;
pub use conjunct::{ConjunctClass, ConjunctClusterMask, ConjunctScanner, ConjunctSpan};
pub use decision::{BreakDecision, Decision, Rule};
pub use matrix::{BreakMatrix, BREAK_MATRIX};
pub use property::BreakProperty;
pub use scanner::Scanner;
