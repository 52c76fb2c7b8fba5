//! Checkout migration
//!
//! Moves the working directory from the current HEAD tree to a target tree:
//!
//! 1. Delete every file of the current tree that the target tree lacks
//! 2. Write out the target tree, creating directories before their contents
//!
//! Files present in both trees are simply overwritten in step 2. Directories
//! left empty by step 1 are pruned. Untracked files that either step would
//! destroy are reported by [`Migration::conflicts`] before anything is touched.

use crate::areas::repository::Repository;
use crate::artifacts::checkout::conflict::{Conflict, ConflictType};
use crate::artifacts::objects::codec;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::tree::builder::list_files;
use std::collections::{BTreeMap, BTreeSet};

pub struct Migration<'r> {
    repository: &'r Repository,
    /// Files of the tree being left
    files_to_clear: BTreeMap<String, ObjectId>,
    /// Tree being checked out
    target_tree: ObjectId,
    /// Files of the target tree
    target_files: BTreeMap<String, ObjectId>,
}

impl<'r> Migration<'r> {
    pub fn new(
        repository: &'r Repository,
        current_tree: Option<&ObjectId>,
        target_tree: ObjectId,
    ) -> anyhow::Result<Self> {
        let files_to_clear = match current_tree {
            Some(tree_oid) => list_files(repository.database(), tree_oid)?,
            None => BTreeMap::new(),
        };
        let target_files = list_files(repository.database(), &target_tree)?;

        Ok(Migration {
            repository,
            files_to_clear,
            target_tree,
            target_files,
        })
    }

    /// Paths of the current tree that the target tree does not have
    pub fn obsolete_files(&self) -> impl Iterator<Item = &String> {
        self.files_to_clear
            .keys()
            .filter(|path| !self.target_files.contains_key(*path))
    }

    /// Untracked files in the working directory that applying would lose
    pub fn conflicts(&self) -> anyhow::Result<Vec<Conflict>> {
        let workspace = self.repository.workspace();
        let mut conflicts: BTreeMap<ConflictType, BTreeSet<String>> = BTreeMap::new();

        for (path, oid) in &self.target_files {
            if self.files_to_clear.contains_key(path) {
                continue;
            }

            if workspace.is_dir(path) {
                let untracked = workspace
                    .list_all_files(path)?
                    .into_iter()
                    .any(|file| !self.files_to_clear.contains_key(&file));
                if untracked {
                    conflicts
                        .entry(ConflictType::StaleDirectory)
                        .or_default()
                        .insert(path.clone());
                }
            } else if workspace.is_file(path) {
                let content = workspace.read_file(path)?;
                if &codec::hash(ObjectType::Blob, &content) != oid {
                    conflicts
                        .entry(ConflictType::UntrackedOverwritten)
                        .or_default()
                        .insert(path.clone());
                }
            }

            for (end, _) in path.match_indices('/') {
                let parent = &path[..end];
                if workspace.is_file(parent) && !self.files_to_clear.contains_key(parent) {
                    conflicts
                        .entry(ConflictType::UntrackedRemoved)
                        .or_default()
                        .insert(parent.to_string());
                }
            }
        }

        Ok(conflicts
            .into_iter()
            .map(|(kind, paths)| Conflict { kind, paths })
            .collect())
    }

    pub fn target_files(&self) -> &BTreeMap<String, ObjectId> {
        &self.target_files
    }

    pub fn into_target_files(self) -> BTreeMap<String, ObjectId> {
        self.target_files
    }

    pub fn apply(&self) -> anyhow::Result<()> {
        let workspace = self.repository.workspace();

        for path in self.obsolete_files() {
            tracing::debug!(path = %path, "removing file");
            // a file that is already gone is fine
            workspace.remove_file(path)?;
        }

        self.materialize(&self.target_tree, "")
    }

    fn materialize(&self, tree_oid: &ObjectId, prefix: &str) -> anyhow::Result<()> {
        let tree = self.repository.database().load_tree(tree_oid)?;
        let workspace = self.repository.workspace();

        for entry in tree.entries() {
            let path = if prefix.is_empty() {
                entry.name.clone()
            } else {
                format!("{prefix}/{}", entry.name)
            };

            match entry.mode {
                EntryMode::Directory => {
                    workspace.make_directory(&path)?;
                    self.materialize(&entry.oid, &path)?;
                }
                EntryMode::File => {
                    let blob = self.repository.database().load_blob(&entry.oid)?;
                    workspace.write_file(&path, blob.content())?;
                }
            }
        }

        Ok(())
    }
}
