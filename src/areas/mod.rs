//! Stateful parts of the tool
//!
//! - `session`: the comparison workflow (inputs, computed diff, analysis slot,
//!   output writer)

pub mod session;
