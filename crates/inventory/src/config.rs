//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOCKBOOK_DATA_DIR` - Directory holding the persisted records
//!   (default: `./data`)

use std::path::PathBuf;

use thiserror::Error;

use crate::storage::{FileStore, StorageError};

const DATA_DIR_VAR: &str = "STOCKBOOK_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "./data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is set but carries an unusable value.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Inventory store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory the file store keeps its records in.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = data_dir_from(std::env::var(DATA_DIR_VAR).ok())?;
        Ok(Self { data_dir })
    }

    /// Open a [`FileStore`] rooted at the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Directory`] if the directory cannot be
    /// created.
    pub fn open_file_store(&self) -> Result<FileStore, StorageError> {
        FileStore::open(self.data_dir.clone())
    }
}

fn data_dir_from(value: Option<String>) -> Result<PathBuf, ConfigError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            DATA_DIR_VAR.to_string(),
            "must not be empty".to_string(),
        )),
        Some(value) => Ok(PathBuf::from(value)),
        None => Ok(PathBuf::from(DEFAULT_DATA_DIR)),
    }
}
