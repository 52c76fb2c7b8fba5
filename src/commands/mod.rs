//! Command implementations
//!
//! Commands are `impl Repository` blocks, organized into two categories:
//!
//! - `plumbing`: Low-level commands for direct object manipulation (hash-object, ls-tree)
//! - `porcelain`: User-facing commands for version control workflows (add, commit, checkout)

pub mod plumbing;
pub mod porcelain;
