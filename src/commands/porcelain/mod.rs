//! Porcelain commands
//!
//! - `compare`: diff two query revisions and render the result
//! - `analyze`: ask the summarizer about the compared change

pub mod analyze;
pub mod compare;
