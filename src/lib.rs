//! A minimal content-addressable version control engine
//!
//! Files are stored as immutable, SHA-1 addressed objects (blobs, trees and
//! commits). A staging index maps working-directory paths to blobs, commits
//! snapshot the index as a tree, and branches are named pointers to commits.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
