use crate::artifacts::status::file_change::{IndexChangeType, WorkspaceChangeType};
use std::collections::{BTreeMap, BTreeSet};

pub type WorkspaceChangeSet = BTreeMap<String, WorkspaceChangeType>;
pub type IndexChangeSet = BTreeMap<String, IndexChangeType>;
pub type FileSet = BTreeSet<String>;

/// Differences between the working directory, the index and HEAD
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceStatus {
    /// Indexed files that are missing or whose content changed
    pub workspace_changes: WorkspaceChangeSet,
    /// Index entries that differ from the HEAD tree
    pub index_changes: IndexChangeSet,
    /// Files on disk the index does not know about
    pub untracked: FileSet,
}

impl WorkspaceStatus {
    /// Whether switching branches could lose work
    ///
    /// Untracked files do not count.
    pub fn is_dirty(&self) -> bool {
        !self.workspace_changes.is_empty() || !self.index_changes.is_empty()
    }

    /// Every path contributing to [`WorkspaceStatus::is_dirty`], sorted
    pub fn dirty_paths(&self) -> Vec<String> {
        self.workspace_changes
            .keys()
            .chain(self.index_changes.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        !self.is_dirty() && self.untracked.is_empty()
    }
}
