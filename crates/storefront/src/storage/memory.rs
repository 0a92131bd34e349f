//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{Storage, StorageError};

/// Volatile in-memory storage.
///
/// Used by tests and anywhere durability is not wanted. The `Mutex` exists
/// only because one backend handle is shared between the cart and session
/// stores; there is no concurrent writer in this core.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.records
            .lock()
            .map_or(None, |records| records.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Ok(mut records) = self.records.lock() {
            records.insert(key.to_owned(), value.to_owned());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if let Ok(mut records) = self.records.lock() {
            records.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("cart"), None);

        storage.put("cart", "[]").expect("put");
        assert_eq!(storage.get("cart").as_deref(), Some("[]"));

        storage.remove("cart").expect("remove");
        assert_eq!(storage.get("cart"), None);
    }

    #[test]
    fn test_put_overwrites() {
        let storage = MemoryStorage::new();
        storage.put("user", "a").expect("put");
        storage.put("user", "b").expect("put");
        assert_eq!(storage.get("user").as_deref(), Some("b"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("missing").is_ok());
    }
}
