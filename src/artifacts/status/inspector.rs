use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::{IndexChangeType, WorkspaceChangeType};
use crate::artifacts::status::status_info::WorkspaceStatus;
use crate::artifacts::tree::builder::list_files;
use derive_new::new;
use std::collections::BTreeMap;

/// Compares the working directory, the index and the HEAD tree
#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Build the full status report for `index`
    pub fn inspect(&self, index: &Index) -> anyhow::Result<WorkspaceStatus> {
        let mut status = WorkspaceStatus::default();

        for (path, oid) in index.entries() {
            let change = self.check_index_against_workspace(path, oid)?;
            if change != WorkspaceChangeType::None {
                status.workspace_changes.insert(path.clone(), change);
            }
        }

        let head_files = self.head_files()?;
        for path in head_files.keys().chain(index.entries().keys()) {
            let change = Self::check_index_against_head(index.get(path), head_files.get(path));
            if change != IndexChangeType::None {
                status.index_changes.insert(path.clone(), change);
            }
        }

        for path in self.repository.workspace().list_files("")? {
            if !index.contains(&path) {
                status.untracked.insert(path);
            }
        }

        Ok(status)
    }

    /// Files recorded in the HEAD commit's tree; empty without a HEAD commit
    pub fn head_files(&self) -> anyhow::Result<BTreeMap<String, ObjectId>> {
        match self.repository.refs().head_commit()? {
            Some(oid) => {
                let commit = self.repository.database().load_commit(&oid)?;
                list_files(self.repository.database(), commit.tree_oid())
            }
            None => Ok(BTreeMap::new()),
        }
    }

    pub fn check_index_against_workspace(
        &self,
        path: &str,
        index_oid: &ObjectId,
    ) -> anyhow::Result<WorkspaceChangeType> {
        let workspace = self.repository.workspace();
        if !workspace.is_file(path) {
            return Ok(WorkspaceChangeType::Deleted);
        }

        let blob = Blob::new(workspace.read_file(path)?);
        if &blob.object_id()? != index_oid {
            Ok(WorkspaceChangeType::Modified)
        } else {
            Ok(WorkspaceChangeType::None)
        }
    }

    pub fn check_index_against_head(
        index_oid: Option<&ObjectId>,
        head_oid: Option<&ObjectId>,
    ) -> IndexChangeType {
        match (index_oid, head_oid) {
            (Some(index_oid), Some(head_oid)) if index_oid != head_oid => IndexChangeType::Modified,
            (Some(_), None) => IndexChangeType::Added,
            (None, Some(_)) => IndexChangeType::Deleted,
            _ => IndexChangeType::None,
        }
    }
}
