//! Working tree status inspection
//!
//! Compares the working directory against the index and the index against
//! the HEAD commit's tree.
//!
//! - `file_change`: Enum types for categorizing changes
//! - `inspector`: Core logic for detecting changes
//! - `status_info`: The aggregated report

pub mod file_change;
pub mod inspector;
pub mod status_info;
