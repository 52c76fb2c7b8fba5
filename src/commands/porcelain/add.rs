use crate::areas::index::{Index, META_PATH_REASON};
use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepoError;
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Paths whose index entries changed while staging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageReport {
    /// Paths given a new blob
    pub staged: Vec<String>,
    /// Paths dropped because their file no longer exists
    pub removed: Vec<String>,
}

impl StageReport {
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty() && self.removed.is_empty()
    }

    fn extend(&mut self, other: StageReport) {
        self.staged.extend(other.staged);
        self.removed.extend(other.removed);
    }
}

impl Repository {
    /// Stage every path in `paths`, printing what changed
    pub fn add(&self, paths: &[PathBuf]) -> anyhow::Result<StageReport> {
        let mut report = StageReport::default();
        for path in paths {
            report.extend(self.stage(path)?);
        }

        for path in &report.staged {
            writeln!(self.writer(), "add '{path}'")?;
        }
        for path in &report.removed {
            writeln!(self.writer(), "remove '{path}'")?;
        }

        Ok(report)
    }

    /// Stage a file or, recursively, a directory
    ///
    /// Relative paths are taken from the repository root.
    pub fn stage(&self, path: &Path) -> anyhow::Result<StageReport> {
        let relative = self.workspace().relative_path(path)?;

        if Workspace::is_meta_path(&relative) {
            return Err(RepoError::invalid_path(relative, META_PATH_REASON).into());
        }
        if !self.workspace().exists(&relative) {
            return Err(RepoError::PathNotFound(path.to_path_buf()).into());
        }

        if self.workspace().is_dir(&relative) {
            return self.stage_directory(&relative);
        }

        if self.workspace().ignore_list()?.is_ignored(&relative) {
            tracing::debug!(path = %relative, "skipping ignored file");
            return Ok(StageReport::default());
        }

        let content = self.workspace().read_file(&relative)?;
        let mut index = self.load_index();
        let unchanged = index.get(&relative) == Some(&Blob::new(content.clone()).object_id()?);

        if unchanged {
            return Ok(StageReport::default());
        }

        self.stage_content(&mut index, &relative, content)?;
        index.save()?;

        Ok(StageReport {
            staged: vec![relative],
            removed: vec![],
        })
    }

    /// Store `content` as a blob and stage it at `path`
    pub fn stage_file(&self, path: &str, content: Bytes) -> anyhow::Result<ObjectId> {
        let mut index = self.load_index();
        let oid = self.stage_content(&mut index, path, content)?;
        index.save()?;

        Ok(oid)
    }

    /// Stage new and modified files under `path` and drop entries whose files
    /// were deleted
    ///
    /// Files whose content already matches the index are left alone.
    pub fn stage_directory(&self, path: &str) -> anyhow::Result<StageReport> {
        let mut index = self.load_index();
        let mut report = StageReport::default();

        for indexed_path in index.paths_under(path) {
            if !self.workspace().is_file(&indexed_path) {
                index.remove(&indexed_path);
                report.removed.push(indexed_path);
            }
        }

        for file in self.workspace().list_files(path)? {
            let content = self.workspace().read_file(&file)?;
            let oid = Blob::new(content.clone()).object_id()?;

            // a path the index has never seen is always staged
            if index.get(&file) == Some(&oid) {
                continue;
            }

            self.stage_content(&mut index, &file, content)?;
            report.staged.push(file);
        }

        if index.is_changed() {
            index.save()?;
        }

        tracing::debug!(
            path,
            staged = report.staged.len(),
            removed = report.removed.len(),
            "staged directory"
        );
        Ok(report)
    }

    fn stage_content(
        &self,
        index: &mut Index,
        path: &str,
        content: Bytes,
    ) -> anyhow::Result<ObjectId> {
        let oid = self.database().store(&Blob::new(content))?;
        index.add(path, oid.clone())?;

        Ok(oid)
    }
}
