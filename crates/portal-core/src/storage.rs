//! Local key-value storage abstraction.
//!
//! The portal keeps its session flags in a small string-to-string store that
//! survives reloads (the browser's local storage plays this role in the web
//! client). Infrastructure provides a file-backed implementation; the
//! in-memory one here is used for ephemeral sessions and tests.

use crate::error::{PortalError, Result};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Persistent string key-value storage.
///
/// Implementations must make `clear` wholesale: every key is removed.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Removes every key.
    fn clear(&self) -> Result<()>;
}

/// Process-local store backed by an ordered map.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> PortalError {
    PortalError::internal("key-value store lock poisoned")
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.entries.read().map_err(poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.entries.write().map_err(poisoned)?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.entries.write().map_err(poisoned)?;
        map.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut map = self.entries.write().map_err(poisoned)?;
        map.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = InMemoryKeyValueStore::new();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        store.remove("theme").unwrap();
        assert!(store.get("theme").unwrap().is_none());

        // Removing again is fine
        store.remove("theme").unwrap();
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = InMemoryKeyValueStore::new();
        store.set("accessToken", "abc").unwrap();
        store.set("isLoggedIn", "true").unwrap();
        assert_eq!(store.len(), 2);

        store.clear().unwrap();
        assert!(store.is_empty());
    }
}
