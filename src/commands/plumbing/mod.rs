//! Plumbing commands
//!
//! - `align`: print the character alignment of two strings
//! - `sections`: print the sections found in an analysis text

pub mod align;
pub mod sections;
