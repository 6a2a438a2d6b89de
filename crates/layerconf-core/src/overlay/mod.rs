//! Base + overlay property merging

mod merger;

pub use merger::{OverlayMerger, MergeReport};
