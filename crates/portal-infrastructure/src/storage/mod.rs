//! Storage primitives shared by the session store and configuration.

mod atomic_file;
mod file_kv;

pub use atomic_file::{AtomicFile, AtomicFileError, FileFormat};
pub use file_kv::FileKeyValueStore;
