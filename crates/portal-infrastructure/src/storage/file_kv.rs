//! File-backed key-value store for the session.

use super::atomic_file::AtomicFile;
use portal_core::error::Result;
use portal_core::storage::KeyValueStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// `KeyValueStore` persisted as a flat JSON object.
///
/// Every write is a locked read-modify-write of the whole file, so separate
/// processes sharing the file (two CLI invocations, for example) never
/// observe a half-written document. Writes replace an unreadable file
/// instead of failing; `clear` never reads it.
pub struct FileKeyValueStore {
    file: AtomicFile<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::json(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.file.load()?.unwrap_or_default())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.file.update_or_reset(BTreeMap::new(), |map| {
            map.insert(key.to_string(), value.to_string());
        })?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.file.path().exists() {
            return Ok(());
        }
        self.file.update_or_reset(BTreeMap::new(), |map| {
            map.remove(key);
        })?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.file.replace(&BTreeMap::new())?;
        tracing::debug!("[FileKeyValueStore] Cleared {}", self.file.path().display());
        Ok(())
    }
}
