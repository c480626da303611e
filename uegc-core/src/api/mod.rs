//! Public segmentation API

pub mod config;
pub mod output;
pub mod segmenter;

#[cfg(test)]
mod tests;

pub use config::{EmptyInputPolicy, SegmenterConfig, SegmenterConfigBuilder};
pub use output::{Cluster, Graphemes, Segmentation, SegmentationStats};
pub use segmenter::{string_from_code_points, Segmenter};
