//! Application state wiring the stores to one storage backend.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{CartStore, SessionStore};
use crate::storage::FileStorage;

/// Shared application state for the shell.
///
/// Holds the configuration and the single durable storage backend. The
/// stores themselves are owned by their call sites (each store is the
/// exclusive owner of its state); this type hands out hydrated stores that
/// all write through the same backend.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    storage: Arc<FileStorage>,
}

impl AppState {
    /// Create application state over the configured storage file.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let storage = Arc::new(FileStorage::open(&config.storage_path));
        Self {
            inner: Arc::new(AppStateInner { config, storage }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// A cart store hydrated from durable storage.
    #[must_use]
    pub fn cart_store(&self) -> CartStore<Arc<FileStorage>> {
        CartStore::open(Arc::clone(&self.inner.storage))
    }

    /// A session store restored from durable storage.
    #[must_use]
    pub fn session_store(&self) -> SessionStore<Arc<FileStorage>> {
        SessionStore::open(Arc::clone(&self.inner.storage))
    }
}
