use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::object::Packable;
use anyhow::anyhow;
use byteorder::{ByteOrder, NetworkEndian, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexHeader {
    pub marker: String,
    pub version: u32,
    pub entries_count: u32,
}

impl IndexHeader {
    pub fn with_count(entries_count: u32) -> Self {
        IndexHeader::new(String::from(SIGNATURE), VERSION, entries_count)
    }

    /// Parse and validate the fixed-size header at the start of `data`
    pub fn parse(data: &[u8]) -> anyhow::Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(anyhow!("Index header truncated"));
        }

        let marker = String::from_utf8_lossy(&data[0..4]).into_owned();
        let version = NetworkEndian::read_u32(&data[4..8]);
        let entries_count = NetworkEndian::read_u32(&data[8..12]);

        if marker != SIGNATURE {
            return Err(anyhow!("Invalid index file signature"));
        }

        if version != VERSION {
            return Err(anyhow!("Unsupported index file version: {}", version));
        }

        Ok(IndexHeader::new(marker, version, entries_count))
    }
}

impl Packable for IndexHeader {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut header_bytes = Vec::with_capacity(HEADER_SIZE);
        header_bytes.write_all(self.marker.as_bytes())?;
        header_bytes.write_u32::<NetworkEndian>(self.version)?;
        header_bytes.write_u32::<NetworkEndian>(self.entries_count)?;

        Ok(Bytes::from(header_bytes))
    }
}
