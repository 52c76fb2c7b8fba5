//! Object types and the canonical object encoding
//!
//! All content is stored as immutable objects identified by SHA-1 hashes:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (modes, names, and object IDs)
//! - **Commit**: Snapshot metadata (tree, parents, author, committer, message)
//!
//! Objects are framed as `<type> <size>\0<content>` before hashing and compression,
//! see [`codec`].

pub mod blob;
pub mod codec;
pub mod commit;
pub mod entry_mode;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in binary format
pub const RAW_OBJECT_ID_LENGTH: usize = 20;
