//! Key-value backends for encoded objects
//!
//! A backend only maps object IDs to already-encoded bytes. Hashing, compression
//! and parsing stay in [`crate::areas::database::Database`], so backends can be
//! swapped without touching object or commit logic.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepoError;
use bytes::Bytes;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

pub trait ObjectBackend: std::fmt::Debug {
    /// Store `data` under `oid` unless the slot is already taken.
    ///
    /// Returns whether anything was written.
    fn put(&self, oid: &ObjectId, data: Bytes) -> anyhow::Result<bool>;

    fn get(&self, oid: &ObjectId) -> anyhow::Result<Option<Bytes>>;

    fn exists(&self, oid: &ObjectId) -> anyhow::Result<bool>;
}

/// One zlib file per object under `objects/<2 hex>/<38 hex>`
#[derive(Debug)]
pub struct LooseObjects {
    path: Box<Path>,
}

impl LooseObjects {
    pub fn new(path: Box<Path>) -> Self {
        LooseObjects { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ObjectBackend for LooseObjects {
    fn put(&self, oid: &ObjectId, data: Bytes) -> anyhow::Result<bool> {
        let object_path = self.path.join(oid.to_path());
        if object_path.exists() {
            return Ok(false);
        }

        let object_dir = object_path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).map_err(|e| RepoError::storage(object_dir, e))?;

        // write to a temp file in the same shard and rename it so readers never see
        // a partially written object
        let mut temp_file = tempfile::Builder::new()
            .prefix("tmp-obj-")
            .tempfile_in(object_dir)
            .map_err(|e| RepoError::storage(object_dir, e))?;
        temp_file
            .write_all(&data)
            .map_err(|e| RepoError::storage(temp_file.path(), e))?;
        temp_file
            .persist(&object_path)
            .map_err(|e| RepoError::storage(&object_path, e.error))?;

        Ok(true)
    }

    fn get(&self, oid: &ObjectId) -> anyhow::Result<Option<Bytes>> {
        let object_path = self.path.join(oid.to_path());

        match std::fs::read(&object_path) {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RepoError::storage(object_path, e).into()),
        }
    }

    fn exists(&self, oid: &ObjectId) -> anyhow::Result<bool> {
        Ok(self.path.join(oid.to_path()).is_file())
    }
}

/// In-process backend, for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryObjects {
    objects: RefCell<HashMap<ObjectId, Bytes>>,
}

impl MemoryObjects {
    pub fn len(&self) -> usize {
        self.objects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.borrow().is_empty()
    }
}

impl ObjectBackend for MemoryObjects {
    fn put(&self, oid: &ObjectId, data: Bytes) -> anyhow::Result<bool> {
        let mut objects = self.objects.borrow_mut();
        if objects.contains_key(oid) {
            return Ok(false);
        }

        objects.insert(oid.clone(), data);
        Ok(true)
    }

    fn get(&self, oid: &ObjectId) -> anyhow::Result<Option<Bytes>> {
        Ok(self.objects.borrow().get(oid).cloned())
    }

    fn exists(&self, oid: &ObjectId) -> anyhow::Result<bool> {
        Ok(self.objects.borrow().contains_key(oid))
    }
}
