//! Line and character diffing
//!
//! - `char_aligner`: greedy character alignment of a modified line pair
//! - `line_differ`: positional line diff of two texts
//! - `line_record`: the value types a comparison produces
//!
//! A comparison is a pure function of its two input texts. Every call builds a
//! fresh `DiffResult` and nothing is shared between calls.

pub mod char_aligner;
pub mod line_differ;
pub mod line_record;
