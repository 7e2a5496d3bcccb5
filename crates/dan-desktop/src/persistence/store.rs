//! Key/value backends for snapshots

use std::collections::HashMap;
use crate::error::PersistenceError;

/// Somewhere a serialized snapshot can be kept between sessions
pub trait SnapshotStore {
    /// Read the blob under `key`, `None` if nothing was saved yet
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the blob under `key`
    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError>;
}

/// Store backed by a map, for tests and native hosts
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw blob, for inspection
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("k").unwrap(), None);

        store.save("k", "{}").unwrap();
        store.save("k", "[]").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("k"), Some("[]"));
    }
}
