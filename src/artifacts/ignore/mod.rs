//! Ignore rules for the working directory
//!
//! Rules live in `<root>/.ignorefile`, one pattern per line. Blank lines and
//! lines starting with `#` are skipped.

pub mod ignore_list;

/// Name of the ignore file at the repository root
pub const IGNORE_FILE: &str = ".ignorefile";
