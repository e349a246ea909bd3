//! Data structures and algorithms
//!
//! - `analysis`: prompt, summarizer boundary, outcome slot and section segmentation
//! - `core`: output plumbing (pager writer)
//! - `diff`: character aligner and positional line differ
//! - `render`: themes and terminal views of diffs and analyses

pub mod analysis;
pub mod core;
pub mod diff;
pub mod render;
