//! References (branches and HEAD)
//!
//! References are small text files under the metadata directory:
//!
//! - `refs/heads/<branch>` holds `<commit-id>\n`
//! - `HEAD` holds `ref: refs/heads/<branch>\n`, or a bare commit ID when detached
//!
//! A branch file only exists once the branch has a commit, so the branch HEAD
//! names in a fresh repository is "unborn".

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepoError;
use anyhow::Context;
use derive_new::new;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// What HEAD points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// Symbolic reference to a branch, which may not exist yet
    Branch(BranchName),
    /// Direct commit ID
    Detached(ObjectId),
}

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.grit`)
    path: Box<Path>,
}

impl Refs {
    /// Read HEAD; a missing or empty HEAD names the default branch
    pub fn head(&self) -> anyhow::Result<Head> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Ok(Head::Branch(BranchName::default()));
        }

        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(Head::Branch(BranchName::default()));
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        match symref_match {
            Some(symref_match) => Ok(Head::Branch(BranchName::try_parse_ref(&symref_match[1])?)),
            None => Ok(Head::Detached(ObjectId::try_parse(content.to_string())?)),
        }
    }

    /// The branch HEAD points at
    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        match self.head()? {
            Head::Branch(name) => Ok(name),
            Head::Detached(oid) => anyhow::bail!("HEAD is detached at {}", oid.to_short_oid()),
        }
    }

    /// The commit HEAD resolves to, through its branch if it has one
    pub fn head_commit(&self) -> anyhow::Result<Option<ObjectId>> {
        match self.head()? {
            Head::Branch(name) => self.branch_commit(&name),
            Head::Detached(oid) => Ok(Some(oid)),
        }
    }

    /// Advance whatever HEAD points at to `oid`
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        match self.head()? {
            Head::Branch(name) => self.set_branch_commit(&name, oid),
            Head::Detached(_) => self.write_ref_file(&self.head_path(), &format!("{oid}\n")),
        }
    }

    /// Point HEAD at `name` symbolically
    pub fn set_head_branch(&self, name: &BranchName) -> anyhow::Result<()> {
        self.write_ref_file(&self.head_path(), &format!("ref: {}\n", name.to_ref()))
    }

    pub fn branch_commit(&self, name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(name);
        if !branch_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {:?}", branch_path))?;

        Ok(Some(ObjectId::try_parse(content.trim().to_string())?))
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.branch_path(name).is_file()
    }

    /// Point `name` at `oid`, creating or overwriting the branch
    pub fn set_branch_commit(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        self.write_ref_file(&self.branch_path(name), &format!("{oid}\n"))
    }

    /// Create a new branch at `oid`, refusing to move an existing one
    pub fn create_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        if self.branch_exists(name) {
            return Err(RepoError::BranchAlreadyExists(name.to_string()).into());
        }

        self.set_branch_commit(name, oid)
    }

    /// Every branch with a commit, sorted by name
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                let name = relative_path
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                BranchName::try_parse(name).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn write_ref_file(&self, path: &Path, content: &str) -> anyhow::Result<()> {
        // create all the parent directories if they don't exist
        let parent = path
            .parent()
            .with_context(|| format!("invalid ref file path {:?}", path))?;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create ref directory at {:?}", parent))?;

        std::fs::write(path, content)
            .with_context(|| format!("failed to write ref file at {:?}", path))
    }

    fn branch_path(&self, name: &BranchName) -> Box<Path> {
        self.path.join(name.to_ref()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
