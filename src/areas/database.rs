use crate::artifacts::database::backend::{LooseObjects, MemoryObjects, ObjectBackend};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::codec;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::RepoError;
use std::path::Path;

/// Content-addressed object store
///
/// Objects are hashed and compressed here, then handed to the backend as
/// opaque bytes keyed by their ID.
#[derive(Debug)]
pub struct Database {
    backend: Box<dyn ObjectBackend>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Self::with_backend(Box::new(LooseObjects::new(path)))
    }

    pub fn in_memory() -> Self {
        Self::with_backend(Box::new(MemoryObjects::default()))
    }

    pub fn with_backend(backend: Box<dyn ObjectBackend>) -> Self {
        Database { backend }
    }

    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let kind = object.object_type();
        let payload = object.serialize()?;
        let oid = codec::hash(kind, &payload);

        if self.backend.exists(&oid)? {
            tracing::trace!(oid = %oid, "object already stored");
            return Ok(oid);
        }

        let encoded = codec::encode(kind, &payload)?;
        if self.backend.put(&oid, encoded)? {
            tracing::debug!(oid = %oid, kind = %kind, size = payload.len(), "stored object");
        }

        Ok(oid)
    }

    pub fn exists(&self, oid: &ObjectId) -> anyhow::Result<bool> {
        self.backend.exists(oid)
    }

    pub fn load(&self, oid: &ObjectId) -> anyhow::Result<ObjectBox> {
        let data = self
            .backend
            .get(oid)?
            .ok_or_else(|| RepoError::ObjectNotFound(oid.to_string()))?;

        let raw = codec::decode(&data).map_err(|e| e.for_object(oid.as_ref()))?;

        let object = ObjectBox::from_raw(raw)
            .map_err(|e| RepoError::corrupt_object(oid.as_ref(), e.to_string()))?;
        Ok(object)
    }

    pub fn load_blob(&self, oid: &ObjectId) -> anyhow::Result<Blob> {
        match self.load(oid)? {
            ObjectBox::Blob(blob) => Ok(blob),
            other => Err(Self::unexpected_kind(oid, "blob", &other).into()),
        }
    }

    pub fn load_tree(&self, oid: &ObjectId) -> anyhow::Result<Tree> {
        match self.load(oid)? {
            ObjectBox::Tree(tree) => Ok(tree),
            other => Err(Self::unexpected_kind(oid, "tree", &other).into()),
        }
    }

    pub fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        match self.load(oid)? {
            ObjectBox::Commit(commit) => Ok(commit),
            other => Err(Self::unexpected_kind(oid, "commit", &other).into()),
        }
    }

    fn unexpected_kind(oid: &ObjectId, expected: &str, found: &ObjectBox) -> RepoError {
        RepoError::corrupt_object(
            oid.as_ref(),
            format!("expected a {expected}, found a {}", found.object_type()),
        )
    }
}
