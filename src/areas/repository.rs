use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::errors::RepoError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Name of the metadata directory at the repository root
pub const META_DIR: &str = ".grit";

/// Name of the index file inside the metadata directory
pub const INDEX_FILE: &str = "index";

/// Name of the objects directory inside the metadata directory
pub const OBJECTS_DIR: &str = "objects";

/// A working directory together with its metadata areas
///
/// Command implementations live in `crate::commands` as `impl Repository`
/// blocks and write their human-readable output to `writer`.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `path`, creating the directory if missing
    ///
    /// The metadata directory is not required to exist yet, so this is what
    /// `init` runs on.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Self::root_path(path)?;
        let database = Database::new(path.join(META_DIR).join(OBJECTS_DIR).into_boxed_path());

        Ok(Self::with_database(path, writer, database))
    }

    /// Like [`Repository::new`], but objects live in memory
    pub fn in_memory(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Self::root_path(path)?;

        Ok(Self::with_database(path, writer, Database::in_memory()))
    }

    /// Find the repository containing `start` by looking for the metadata
    /// directory in it and in each of its parents
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", start.display()))?;

        let root = start
            .ancestors()
            .find(|dir| dir.join(META_DIR).is_dir())
            .ok_or_else(|| RepoError::NotARepository(start.clone()))?;

        tracing::debug!(root = %root.display(), "found repository");
        Self::new(root, writer)
    }

    fn root_path(path: &Path) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Unable to create directory {}", path.display()))?;

        path.canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))
    }

    fn with_database(path: PathBuf, writer: Box<dyn std::io::Write>, database: Database) -> Self {
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(path.join(META_DIR).into_boxed_path());

        Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
            refs,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn meta_path(&self) -> PathBuf {
        self.path.join(META_DIR)
    }

    pub fn objects_path(&self) -> PathBuf {
        self.meta_path().join(OBJECTS_DIR)
    }

    pub fn index_path(&self) -> PathBuf {
        self.meta_path().join(INDEX_FILE)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Read the index from disk; missing or malformed files give an empty index
    pub fn load_index(&self) -> Index {
        Index::load(self.index_path().into_boxed_path())
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.path)
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}
