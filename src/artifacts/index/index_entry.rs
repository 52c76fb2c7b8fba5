//! Index entry representation
//!
//! Each entry binds a repository-relative path (`/`-separated) to the ID of
//! the blob staged for it.

use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::{Context, anyhow};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::{Read, Write};

/// Longest path an entry can carry (its length is stored in a `u16`)
const MAX_PATH_SIZE: usize = u16::MAX as usize;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// Path relative to the repository root
    pub path: String,
    /// ID of the staged blob
    pub oid: ObjectId,
}

impl IndexEntry {
    /// Read one entry from the front of `reader`, advancing it
    pub fn read_from(reader: &mut &[u8]) -> anyhow::Result<Self> {
        let oid = ObjectId::read_raw_from(reader).context("Index entry truncated in object id")?;
        let path_len = reader
            .read_u16::<NetworkEndian>()
            .context("Index entry truncated in path length")?;

        let mut path_bytes = vec![0; path_len as usize];
        reader
            .read_exact(&mut path_bytes)
            .context("Index entry truncated in path")?;
        let path = String::from_utf8(path_bytes).context("Index entry path is not UTF-8")?;

        Ok(IndexEntry::new(path, oid))
    }
}

impl Packable for IndexEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        if self.path.len() > MAX_PATH_SIZE {
            return Err(anyhow!("Index entry path too long: {}", self.path));
        }

        let mut entry_bytes = Vec::with_capacity(22 + self.path.len());
        self.oid.write_raw_to(&mut entry_bytes)?;
        entry_bytes.write_u16::<NetworkEndian>(self.path.len() as u16)?;
        entry_bytes.write_all(self.path.as_bytes())?;

        Ok(Bytes::from(entry_bytes))
    }
}
