//! Tree building from the staging index
//!
//! Index paths are split into segments and inserted into an owned hierarchy of
//! [`TreeNode`]s. Storing walks the hierarchy depth-first so every child tree
//! is written, and its ID known, before the tree that points at it.

use crate::areas::database::Database;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{Tree, TreeEntry, validate_name};
use crate::errors::RepoError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File(ObjectId),
    Directory(BTreeMap<String, TreeNode>),
}

#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    root: BTreeMap<String, TreeNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a String, &'a ObjectId)>,
    ) -> anyhow::Result<Self> {
        let mut builder = Self::new();
        for (path, oid) in entries {
            builder.insert(path, oid.clone())?;
        }

        Ok(builder)
    }

    /// Place a blob at `path`, creating intermediate directories
    pub fn insert(&mut self, path: &str, oid: ObjectId) -> anyhow::Result<()> {
        let mut segments = path.split('/').collect::<Vec<_>>();
        for segment in &segments {
            validate_name(segment).map_err(|_| RepoError::invalid_path(path, "invalid segment"))?;
        }

        let name = segments.pop().unwrap_or_default();

        let mut children = &mut self.root;
        for segment in segments {
            let node = children
                .entry(segment.to_string())
                .or_insert_with(|| TreeNode::Directory(BTreeMap::new()));

            children = match node {
                TreeNode::Directory(children) => children,
                TreeNode::File(_) => {
                    return Err(RepoError::invalid_path(
                        path,
                        format!("'{segment}' is both a file and a directory"),
                    )
                    .into());
                }
            };
        }

        if let Some(TreeNode::Directory(_)) = children.get(name) {
            return Err(
                RepoError::invalid_path(path, "path is both a file and a directory").into(),
            );
        }
        children.insert(name.to_string(), TreeNode::File(oid));

        Ok(())
    }

    pub fn root(&self) -> &BTreeMap<String, TreeNode> {
        &self.root
    }

    /// Store every tree bottom-up and return the root tree's ID
    pub fn store(self, database: &Database) -> anyhow::Result<ObjectId> {
        Self::store_directory(database, self.root)
    }

    fn store_directory(
        database: &Database,
        children: BTreeMap<String, TreeNode>,
    ) -> anyhow::Result<ObjectId> {
        let mut entries = Vec::with_capacity(children.len());

        for (name, node) in children {
            let entry = match node {
                TreeNode::File(oid) => TreeEntry::try_new(EntryMode::File, name, oid)?,
                TreeNode::Directory(grandchildren) => {
                    let oid = Self::store_directory(database, grandchildren)?;
                    TreeEntry::try_new(EntryMode::Directory, name, oid)?
                }
            };
            entries.push(entry);
        }

        database.store(&Tree::new(entries))
    }
}

/// Store the trees for a path → blob mapping and return the root tree's ID
///
/// An empty mapping stores and returns the empty tree.
pub fn build_from_index(
    database: &Database,
    entries: &BTreeMap<String, ObjectId>,
) -> anyhow::Result<ObjectId> {
    TreeBuilder::from_entries(entries)?.store(database)
}

/// Flatten a stored tree into a path → blob mapping
pub fn list_files(
    database: &Database,
    tree_oid: &ObjectId,
) -> anyhow::Result<BTreeMap<String, ObjectId>> {
    let mut files = BTreeMap::new();
    collect_files(database, tree_oid, "", &mut files)?;

    Ok(files)
}

fn collect_files(
    database: &Database,
    tree_oid: &ObjectId,
    prefix: &str,
    files: &mut BTreeMap<String, ObjectId>,
) -> anyhow::Result<()> {
    let tree = database.load_tree(tree_oid)?;

    for entry in tree.into_entries() {
        let path = if prefix.is_empty() {
            entry.name
        } else {
            format!("{prefix}/{}", entry.name)
        };

        match entry.mode {
            EntryMode::Directory => collect_files(database, &entry.oid, &path, files)?,
            EntryMode::File => {
                files.insert(path, entry.oid);
            }
        }
    }

    Ok(())
}
