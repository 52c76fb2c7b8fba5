//! Branch switching
//!
//! A checkout replaces the files of the current HEAD tree with the files of
//! the target tree. It only runs on a clean working directory and refuses to
//! replace untracked files, so no local work can be lost.

pub mod conflict;
pub mod migration;
