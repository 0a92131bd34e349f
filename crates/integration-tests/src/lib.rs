//! Cross-store scenario tests for BestCakes.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bestcakes-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart mutations, checkout and durability
//! - `session_flow` - Login/register/logout lifecycle and order history
//!
//! The tests drive the real `FileStorage` backend in a temp directory, so
//! they exercise the same persistence path the shell uses.

use std::path::PathBuf;
use std::sync::Once;

use tempfile::TempDir;

use bestcakes_storefront::storage::FileStorage;

static TRACING: Once = Once::new();

/// Initialize tracing once for the whole test binary.
///
/// Filter via `RUST_LOG` (e.g. `RUST_LOG=bestcakes_storefront=debug`).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A durable storage backend in a temp directory.
///
/// Keep the context alive for as long as the storage is in use; dropping it
/// deletes the directory.
pub struct StorageContext {
    dir: TempDir,
}

impl StorageContext {
    /// Create a fresh context with an empty storage file location.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        init_tracing();
        let dir = TempDir::new().expect("create temp dir");
        Self { dir }
    }

    /// Path of the backing storage file.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.dir.path().join("bestcakes-store.json")
    }

    /// Open the file storage, hydrating whatever a previous open persisted.
    #[must_use]
    pub fn open_storage(&self) -> FileStorage {
        FileStorage::open(self.storage_path())
    }
}

impl Default for StorageContext {
    fn default() -> Self {
        Self::new()
    }
}
