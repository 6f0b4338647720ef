// file: src/storage/mod.rs
// description: storage module exports
// reference: internal module structure

mod file;
mod kv;
mod record_store;

pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use record_store::{RecordStore, StorageFormat};
