//! SHA-1 trailer for the index file

use crate::artifacts::index::CHECKSUM_SIZE;
use anyhow::anyhow;
use bytes::Bytes;
use sha1::{Digest, Sha1};

/// Accumulates index bytes while hashing them
#[derive(Default)]
pub struct Checksum {
    buffer: Vec<u8>,
    digest: Sha1,
}

impl Checksum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, data: &[u8]) {
        self.digest.update(data);
        self.buffer.extend_from_slice(data);
    }

    /// Append the checksum and return the complete file content
    pub fn finish(mut self) -> Bytes {
        let digest = self.digest.finalize();
        self.buffer.extend_from_slice(&digest);
        Bytes::from(self.buffer)
    }

    /// Check the trailing checksum and return the content before it
    pub fn verify(data: &[u8]) -> anyhow::Result<&[u8]> {
        if data.len() < CHECKSUM_SIZE {
            return Err(anyhow!("Index file too short for checksum"));
        }

        let (content, expected) = data.split_at(data.len() - CHECKSUM_SIZE);
        let actual = Sha1::digest(content);

        if actual.as_slice() != expected {
            return Err(anyhow!("Checksum does not match value stored on disk"));
        }

        Ok(content)
    }
}
