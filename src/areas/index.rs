//! Staging index
//!
//! The index tracks which blob each path should have in the next commit.
//! Paths are repository-relative and `/`-separated.
//!
//! The whole table is read on [`Index::load`] and written back on
//! [`Index::save`]; there is no incremental update of the file.

use crate::areas::workspace::Workspace;
use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::HEADER_SIZE;
use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::validate_name;
use crate::errors::RepoError;
use anyhow::{Context, anyhow};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

pub const META_PATH_REASON: &str = "inside the repository metadata directory";

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.grit/index`)
    path: Box<Path>,
    /// Staged blobs mapped by path
    entries: BTreeMap<String, ObjectId>,
    /// Whether the entries changed since the last load or save
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    /// Read the index from disk
    ///
    /// A missing file yields an empty index. So does a malformed one, after
    /// logging a warning, so a damaged index never blocks the repository.
    pub fn load(path: Box<Path>) -> Self {
        let mut index = Index::new(path);

        let data = match std::fs::read(&index.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return index,
            Err(e) => {
                tracing::warn!(
                    path = %index.path.display(),
                    error = %e,
                    "unable to read index, using an empty one"
                );
                return index;
            }
        };

        match Self::parse(&data) {
            Ok(entries) => {
                tracing::debug!(
                    path = %index.path.display(),
                    entries = entries.len(),
                    "loaded index"
                );
                index.entries = entries;
            }
            Err(e) => {
                tracing::warn!(
                    path = %index.path.display(),
                    error = %e,
                    "discarding malformed index"
                );
            }
        }

        index
    }

    fn parse(data: &[u8]) -> anyhow::Result<BTreeMap<String, ObjectId>> {
        let content = Checksum::verify(data)?;
        let header = IndexHeader::parse(content)?;

        let mut reader = &content[HEADER_SIZE..];
        let mut entries = BTreeMap::new();

        for _ in 0..header.entries_count {
            let entry = IndexEntry::read_from(&mut reader)?;
            entries.insert(entry.path, entry.oid);
        }

        if !reader.is_empty() {
            return Err(anyhow!("Trailing data after {} index entries", header.entries_count));
        }

        Ok(entries)
    }

    /// Replace the index file with the current entries
    pub fn save(&mut self) -> anyhow::Result<()> {
        let mut writer = Checksum::new();

        let header = IndexHeader::with_count(self.entries.len() as u32);
        writer.write(&header.serialize()?);

        for (path, oid) in &self.entries {
            let entry = IndexEntry::new(path.clone(), oid.clone());
            writer.write(&entry.serialize()?);
        }

        let data = writer.finish();

        let index_dir = self
            .path
            .parent()
            .ok_or_else(|| anyhow!("Invalid index path {}", self.path.display()))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(index_dir)
            .context(format!("Unable to create index in {}", index_dir.display()))?;
        temp_file.write_all(&data)?;
        temp_file
            .persist(&self.path)
            .context(format!("Unable to write index {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), entries = self.entries.len(), "saved index");
        self.changed = false;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, path: &str) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Stage `oid` for `path`
    ///
    /// A path cannot be both a file and a directory: staging `a/b` drops an
    /// entry for `a`, and staging `a` drops every entry under `a/`.
    pub fn add(&mut self, path: &str, oid: ObjectId) -> anyhow::Result<()> {
        for segment in path.split('/') {
            validate_name(segment)?;
        }
        if Workspace::is_meta_path(path) {
            return Err(RepoError::invalid_path(path, META_PATH_REASON).into());
        }

        self.discard_conflicts(path);
        self.entries.insert(path.to_string(), oid);
        self.changed = true;

        Ok(())
    }

    fn discard_conflicts(&mut self, path: &str) {
        for (idx, _) in path.match_indices('/') {
            self.entries.remove(&path[..idx]);
        }

        let children = self.children_of(path);
        for child in children {
            self.entries.remove(&child);
        }
    }

    fn children_of(&self, path: &str) -> Vec<String> {
        let prefix = format!("{path}/");
        self.entries
            .range(prefix.clone()..)
            .take_while(|(entry_path, _)| entry_path.starts_with(&prefix))
            .map(|(entry_path, _)| entry_path.clone())
            .collect()
    }

    /// Remove `path` and anything staged beneath it
    pub fn remove(&mut self, path: &str) -> bool {
        let mut removed = self.entries.remove(path).is_some();

        for child in self.children_of(path) {
            self.entries.remove(&child);
            removed = true;
        }

        self.changed |= removed;
        removed
    }

    /// Replace every entry with `entries`
    pub fn replace(&mut self, entries: BTreeMap<String, ObjectId>) {
        self.entries = entries;
        self.changed = true;
    }

    pub fn entries(&self) -> &BTreeMap<String, ObjectId> {
        &self.entries
    }

    /// Paths staged at or below `path`; `.` or an empty path selects everything
    pub fn paths_under(&self, path: &str) -> Vec<String> {
        if path.is_empty() || path == "." {
            return self.entries.keys().cloned().collect();
        }

        let mut paths = self.children_of(path);
        if self.entries.contains_key(path) {
            paths.insert(0, path.to_string());
        }
        paths
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }
}
