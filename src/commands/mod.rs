//! Command implementations
//!
//! Commands are `impl Session` blocks:
//!
//! - `plumbing`: low-level views of the building blocks (character alignment,
//!   analysis segmentation), useful for scripting and debugging
//! - `porcelain`: the user-facing workflow (compare two revisions, analyze
//!   the change)

pub mod plumbing;
pub mod porcelain;
