//! Query revision diffing
//!
//! Compares two revisions of a query (or any multi-line text) line by line,
//! pairs lines by position, and highlights the characters that differ inside
//! modified lines. An optional external summarizer can describe the change.
//!
//! - `areas`: the comparison session
//! - `artifacts`: diff core, analysis boundary and terminal rendering
//! - `commands`: plumbing and porcelain commands on the session

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::diff::char_aligner::{CharAlignment, CharUnit, align};
pub use artifacts::diff::line_differ::{BlankLinePolicy, compute_line_diff, compute_line_diff_with};
pub use artifacts::diff::line_record::{DiffResult, DiffStats, LineKind, LineRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ViewMode {
    /// Original and updated panes next to each other
    #[default]
    SideBySide,
    /// Original pane followed by the updated pane
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}
