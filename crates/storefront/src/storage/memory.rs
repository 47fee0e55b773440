//! In-memory storage fake for tests.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::{StorageError, StoragePort};

/// A `HashMap`-backed [`StoragePort`] that never fails.
///
/// Used by unit tests to observe exactly what a container persists without
/// touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything currently stored, for test assertions.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.read("k").unwrap().is_none());

        storage.write("k", "v").unwrap();
        assert_eq!(storage.read("k").unwrap().unwrap(), "v");

        storage.remove("k").unwrap();
        assert!(storage.read("k").unwrap().is_none());
    }

    #[test]
    fn test_snapshot() {
        let storage = MemoryStorage::new();
        storage.write("a", "1").unwrap();
        storage.write("b", "2").unwrap();

        let snapshot = storage.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("a").map(String::as_str), Some("1"));
    }
}
