//! Storage backends for the object database
//!
//! The database talks to storage only through the `put`/`get`/`exists`
//! interface in [`backend::ObjectBackend`]:
//!
//! - `LooseObjects`: one compressed file per object, sharded by hash prefix
//! - `MemoryObjects`: an in-process map

pub mod backend;
