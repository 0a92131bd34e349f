//! File-backed storage backend.
//!
//! All records live in a single JSON object on disk, keyed by record name.
//! Every mutation rewrites the whole file (the records here are a cart and a
//! profile; delta persistence would buy nothing). The rewrite goes through a
//! sibling temp file and a rename so a crash never leaves a half-written
//! store behind.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{Storage, StorageError};

/// Durable storage backed by a JSON file.
pub struct FileStorage {
    path: PathBuf,
    records: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open the store at `path`, hydrating existing records.
    ///
    /// A missing file starts empty. A malformed file is treated as empty
    /// too, matching the fail-soft contract of the whole storage layer.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = read_records(&path);
        Self {
            path,
            records: Mutex::new(records),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_records(&self, records: &HashMap<String, String>) -> Result<(), StorageError> {
        let encoded = serde_json::to_string_pretty(records)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn read_records(path: &Path) -> HashMap<String, String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read storage file, starting empty");
            return HashMap::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "malformed storage file, starting empty");
            HashMap::new()
        }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.records
            .lock()
            .map_or(None, |records| records.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let Ok(mut records) = self.records.lock() else {
            return Ok(());
        };
        records.insert(key.to_owned(), value.to_owned());
        self.write_records(&records)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let Ok(mut records) = self.records.lock() else {
            return Ok(());
        };
        if records.remove(key).is_none() {
            return Ok(());
        }
        self.write_records(&records)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn storage_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("store.json")
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = storage_path(&dir);

        let storage = FileStorage::open(&path);
        storage.put("cart", "[{\"id\":1}]").unwrap();
        storage.put("user", "{\"name\":\"x\"}").unwrap();
        drop(storage);

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("cart").as_deref(), Some("[{\"id\":1}]"));
        assert_eq!(reopened.get("user").as_deref(), Some("{\"name\":\"x\"}"));
    }

    #[test]
    fn test_remove_deletes_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = storage_path(&dir);

        let storage = FileStorage::open(&path);
        storage.put("cart", "[]").unwrap();
        storage.remove("cart").unwrap();
        drop(storage);

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("cart"), None);
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(storage_path(&dir));
        assert_eq!(storage.get("cart"), None);
    }

    #[test]
    fn test_malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = storage_path(&dir);
        fs::write(&path, "not json {{{").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get("cart"), None);

        // A write from the empty state replaces the corrupt file.
        storage.put("cart", "[]").unwrap();
        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("cart").as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_absent_does_not_touch_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = storage_path(&dir);

        let storage = FileStorage::open(&path);
        storage.remove("missing").unwrap();
        assert!(!path.exists());
    }
}
