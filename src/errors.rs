//! Typed repository errors
//!
//! Operations return `anyhow::Result` and raise these values for the conditions
//! callers may want to tell apart. Use `error.downcast_ref::<RepoError>()` to
//! inspect them.

use crate::artifacts::checkout::conflict::Conflict;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    /// The path given to `add` does not exist in the working directory
    #[error("pathspec '{}' did not match any files", .0.display())]
    PathNotFound(PathBuf),

    /// No `.grit` directory in the given path or any of its parents
    #[error("not a grit repository (or any of the parent directories): {}", .0.display())]
    NotARepository(PathBuf),

    #[error("object {0} not found")]
    ObjectNotFound(String),

    #[error("corrupt object {oid}: {reason}")]
    CorruptObject { oid: String, reason: String },

    /// An I/O failure inside the object store
    #[error("storage failure at {}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "your local changes would be overwritten by checkout:\n{}\n\
         Please commit your changes or stage them before you switch branches.",
        .0.iter().map(|p| format!("\t{p}")).collect::<Vec<_>>().join("\n")
    )]
    DirtyWorkingDirectory(Vec<String>),

    /// Untracked files would be overwritten or removed by a checkout
    #[error(
        "{}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    )]
    CheckoutConflict(Vec<Conflict>),

    #[error("branch '{0}' not found")]
    BranchNotFound(String),

    #[error("a branch named '{0}' already exists")]
    BranchAlreadyExists(String),

    #[error("'{0}' is not a valid branch name")]
    InvalidBranchName(String),

    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("no commits yet")]
    NoCommitsYet,
}

impl RepoError {
    pub fn corrupt_object(oid: impl Into<String>, reason: impl Into<String>) -> Self {
        RepoError::CorruptObject {
            oid: oid.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        RepoError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Attach the object ID to a corruption error raised while decoding it
    pub fn for_object(self, oid: impl Into<String>) -> Self {
        match self {
            RepoError::CorruptObject { reason, .. } => RepoError::corrupt_object(oid, reason),
            other => other,
        }
    }

    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepoError::Storage {
            path: path.into(),
            source,
        }
    }
}
