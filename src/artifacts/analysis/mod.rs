//! Change analysis produced by an external summarizer
//!
//! - `prompt`: the analyst prompt built from both query revisions
//! - `summarizer`: the `Summarizer` boundary and a process-backed implementation
//! - `outcome`: the analysis result slot, which records failure instead of raising it
//! - `sections`: heading and list-item segmentation of the returned text
//!
//! None of this touches a computed diff. A failed analysis is reported in its
//! own slot and leaves the diff as it was.

pub mod outcome;
pub mod prompt;
pub mod sections;
pub mod summarizer;

pub const FAILED_ANALYSIS_MESSAGE: &str = "Failed to generate analysis. Please try again.";
pub const LEADING_SECTION_TITLE: &str = "Summary";

pub const HEADING_REGEX: &str = r"^\s{0,3}#{1,6}\s+(.+?)\s*#*\s*$";
pub const BOLD_HEADING_REGEX: &str = r"^\s*\*\*([^*]+)\*\*\s*:?\s*$";
pub const NUMBERED_HEADING_REGEX: &str = r"^\s*\d+[.)]\s+\*\*([^*]+)\*\*\s*:?\s*(.*)$";
