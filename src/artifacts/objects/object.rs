use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::codec::{self, RawObject};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use bytes::Bytes;

/// Produces the object payload, without the `<type> <size>\0` header
pub trait Packable {
    fn serialize(&self) -> anyhow::Result<Bytes>;
}

/// Parses an object payload, without the `<type> <size>\0` header
pub trait Unpackable {
    fn deserialize(payload: Bytes) -> anyhow::Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    fn object_id(&self) -> anyhow::Result<ObjectId> {
        let payload = self.serialize()?;
        Ok(codec::hash(self.object_type(), &payload))
    }
}

/// Any stored object, tagged by its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectBox {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
}

impl ObjectBox {
    pub fn from_raw(raw: RawObject) -> anyhow::Result<Self> {
        match raw.kind {
            ObjectType::Blob => Ok(ObjectBox::Blob(Blob::deserialize(raw.payload)?)),
            ObjectType::Tree => Ok(ObjectBox::Tree(Tree::deserialize(raw.payload)?)),
            ObjectType::Commit => Ok(ObjectBox::Commit(Commit::deserialize(raw.payload)?)),
        }
    }
}

impl Packable for ObjectBox {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        match self {
            ObjectBox::Blob(blob) => blob.serialize(),
            ObjectBox::Tree(tree) => tree.serialize(),
            ObjectBox::Commit(commit) => commit.serialize(),
        }
    }
}

impl Object for ObjectBox {
    fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(_) => ObjectType::Blob,
            ObjectBox::Tree(_) => ObjectType::Tree,
            ObjectBox::Commit(_) => ObjectType::Commit,
        }
    }

    fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Tree(tree) => tree.display(),
            ObjectBox::Commit(commit) => commit.display(),
        }
    }
}
