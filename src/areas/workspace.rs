//! Working directory access
//!
//! Paths handed to and returned from the workspace are repository-relative
//! and `/`-separated, the same form the index and trees use.

use crate::areas::repository::META_DIR;
use crate::artifacts::ignore::ignore_list::IgnoreList;
use crate::errors::RepoError;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ignore_list(&self) -> anyhow::Result<IgnoreList> {
        IgnoreList::load(&self.path)
    }

    /// Convert a path into repository-relative form
    ///
    /// Relative paths are taken from the workspace root. `.` and `..` are
    /// resolved lexically; a path leaving the workspace is rejected.
    pub fn relative_path(&self, path: &Path) -> anyhow::Result<String> {
        let relative = if path.is_absolute() {
            path.strip_prefix(&self.path).map_err(|_| {
                RepoError::invalid_path(path.to_string_lossy(), "outside the repository")
            })?
        } else {
            path
        };

        let mut segments: Vec<String> = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => segments.push(name.to_string_lossy().into_owned()),
                Component::CurDir => {}
                Component::ParentDir => {
                    if segments.pop().is_none() {
                        return Err(RepoError::invalid_path(
                            path.to_string_lossy(),
                            "outside the repository",
                        )
                        .into());
                    }
                }
                Component::RootDir | Component::Prefix(_) => {}
            }
        }

        Ok(segments.join("/"))
    }

    pub fn absolute_path(&self, path: &str) -> PathBuf {
        if path.is_empty() {
            self.path.to_path_buf()
        } else {
            self.path.join(path)
        }
    }

    /// Every file at or below `path`, sorted, skipping the metadata directory
    /// and ignored paths
    pub fn list_files(&self, path: &str) -> anyhow::Result<Vec<String>> {
        let ignore_list = self.ignore_list()?;
        self.walk_files(path, |relative| !ignore_list.is_ignored(relative))
    }

    /// Every file at or below `path`, ignored ones included, skipping only the
    /// metadata directory
    pub fn list_all_files(&self, path: &str) -> anyhow::Result<Vec<String>> {
        self.walk_files(path, |_| true)
    }

    fn walk_files(&self, path: &str, keep: impl Fn(&str) -> bool) -> anyhow::Result<Vec<String>> {
        let root = self.absolute_path(path);

        if !root.exists() {
            return Err(RepoError::PathNotFound(root).into());
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| match self.relative_path(entry.path()) {
                Ok(relative) => {
                    relative.is_empty() || (!Self::is_meta_path(&relative) && keep(&relative))
                }
                Err(_) => false,
            });

        for entry in walker {
            let entry = entry.with_context(|| format!("Unable to walk {}", root.display()))?;
            if entry.file_type().is_file() {
                files.push(self.relative_path(entry.path())?);
            }
        }

        Ok(files)
    }

    /// Whether `relative` is, or lies inside, the metadata directory
    pub fn is_meta_path(relative: &str) -> bool {
        relative.split('/').any(|segment| segment == META_DIR)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.absolute_path(path).exists()
    }

    pub fn is_file(&self, path: &str) -> bool {
        self.absolute_path(path).is_file()
    }

    pub fn is_dir(&self, path: &str) -> bool {
        self.absolute_path(path).is_dir()
    }

    pub fn read_file(&self, path: &str) -> anyhow::Result<Bytes> {
        let file_path = self.absolute_path(path);
        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(Bytes::from(content))
    }

    /// Write `data` to `path`, replacing a directory in the way and creating parents
    pub fn write_file(&self, path: &str, data: &[u8]) -> anyhow::Result<()> {
        let file_path = self.absolute_path(path);

        if file_path.is_dir() {
            std::fs::remove_dir_all(&file_path).with_context(|| {
                format!("Failed to remove existing directory: {:?}", file_path)
            })?;
        }
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        std::fs::write(&file_path, data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))
    }

    /// Create a directory at `path`, replacing a file in the way
    pub fn make_directory(&self, path: &str) -> anyhow::Result<()> {
        let dir_path = self.absolute_path(path);

        if dir_path.is_file() {
            std::fs::remove_file(&dir_path)
                .with_context(|| format!("Failed to remove file: {:?}", dir_path))?;
        }

        std::fs::create_dir_all(&dir_path)
            .with_context(|| format!("Failed to create directory: {:?}", dir_path))
    }

    /// Delete a file; an already-missing file is not an error
    ///
    /// Parent directories left empty are removed, up to the workspace root.
    pub fn remove_file(&self, path: &str) -> anyhow::Result<()> {
        let file_path = self.absolute_path(path);

        match std::fs::remove_file(&file_path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to remove file: {:?}", file_path));
            }
        }

        self.prune_empty_parent_dirs(&file_path)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(&self.path)
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("Failed to remove empty directory: {:?}", parent))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}
