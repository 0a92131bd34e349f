//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BESTCAKES_STORAGE_PATH` - Path of the durable storage file
//!   (default: `bestcakes-store.json` in the working directory)

use std::path::PathBuf;

use thiserror::Error;

/// Default backing file for the durable key-value store.
const DEFAULT_STORAGE_PATH: &str = "bestcakes-store.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Path of the durable storage file.
    pub storage_path: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_path = match lookup("BESTCAKES_STORAGE_PATH") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "BESTCAKES_STORAGE_PATH".to_owned(),
                    "path is empty".to_owned(),
                ));
            }
            Some(value) => PathBuf::from(value),
            None => PathBuf::from(DEFAULT_STORAGE_PATH),
        };

        Ok(Self { storage_path })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}
