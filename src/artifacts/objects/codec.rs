//! Canonical object encoding
//!
//! Every object is framed as `<kind> <payload length>\0<payload>`. The object ID
//! is the SHA-1 of that uncompressed frame; the stored form is the frame
//! compressed with zlib, so the hash does not depend on the compression level.

use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepoError;
use anyhow::Context;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::{Read, Write};

/// Label used for corruption errors raised before the object ID is known
const UNKNOWN_OBJECT: &str = "<encoded data>";

/// A decoded object: its kind and uncompressed payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObject {
    pub kind: ObjectType,
    pub payload: Bytes,
}

fn header(kind: ObjectType, payload_len: usize) -> String {
    format!("{} {}\0", kind.as_str(), payload_len)
}

pub fn hash(kind: ObjectType, payload: &[u8]) -> ObjectId {
    let mut hasher = Sha1::new();
    hasher.update(header(kind, payload.len()).as_bytes());
    hasher.update(payload);

    let mut digest = [0u8; RAW_OBJECT_ID_LENGTH];
    digest.copy_from_slice(&hasher.finalize());
    ObjectId::from_raw(digest)
}

pub fn encode(kind: ObjectType, payload: &[u8]) -> anyhow::Result<Bytes> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(header(kind, payload.len()).as_bytes())
        .and_then(|_| encoder.write_all(payload))
        .context("Unable to compress object content")?;

    encoder
        .finish()
        .map(Bytes::from)
        .context("Unable to finish compressing object content")
}

pub fn decode(data: &[u8]) -> Result<RawObject, RepoError> {
    let corrupt = |reason: String| RepoError::corrupt_object(UNKNOWN_OBJECT, reason);

    let mut frame = Vec::new();
    flate2::read::ZlibDecoder::new(data)
        .read_to_end(&mut frame)
        .map_err(|e| corrupt(format!("unable to decompress: {e}")))?;

    let nul = frame
        .iter()
        .position(|&b| b == b'\0')
        .ok_or_else(|| corrupt("header is missing the NUL separator".to_string()))?;
    let header = std::str::from_utf8(&frame[..nul])
        .map_err(|_| corrupt("header is not valid UTF-8".to_string()))?;

    let (kind, declared_len) = header
        .split_once(' ')
        .ok_or_else(|| corrupt(format!("malformed header '{header}'")))?;
    let kind = ObjectType::try_from(kind).map_err(|e| corrupt(e.to_string()))?;
    let declared_len = declared_len
        .parse::<usize>()
        .map_err(|_| corrupt(format!("invalid payload length '{declared_len}'")))?;

    let payload = frame.split_off(nul + 1);
    if payload.len() != declared_len {
        return Err(corrupt(format!(
            "declared length {declared_len} but payload has {} bytes",
            payload.len()
        )));
    }

    Ok(RawObject {
        kind,
        payload: Bytes::from(payload),
    })
}
