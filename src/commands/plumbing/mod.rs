//! Plumbing commands (low-level operations)
//!
//! Plumbing commands give direct access to the object store and are the
//! building blocks the porcelain commands compose.
//!
//! ## Commands
//!
//! - `cat-file`: Print a stored object
//! - `hash-object`: Compute a blob ID and optionally store the blob
//! - `ls-tree`: List the contents of a tree object
//! - `write-tree`: Store the index as trees

pub mod cat_file;
pub mod hash_object;
pub mod ls_tree;
pub mod write_tree;
