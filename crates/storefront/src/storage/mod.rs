//! Durable local key-value storage.
//!
//! Models browser-local storage: independent string-keyed records that
//! survive restarts but are scoped to one device. Two backends are provided:
//! [`MemoryStorage`] for tests and [`FileStorage`] for a JSON file on disk.
//!
//! Durability is best-effort throughout the core. Callers treat a read
//! failure or malformed record as "absent" and log write failures rather
//! than surfacing them (there is nothing the shell could do about either).

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors that can occur inside a storage backend.
///
/// These never cross the store boundary; see the module docs.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be encoded.
    #[error("storage encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A string-keyed key-value store.
///
/// Methods take `&self`; backends shared between stores use interior
/// mutability. Implementations must be fail-soft on reads: a corrupt backing
/// record is reported as absent, not as an error.
pub trait Storage: Send + Sync {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value could not be made durable.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the record stored under `key`. Absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the deletion could not be made durable.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
