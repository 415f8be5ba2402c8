//! Key-value persistence backends for the inventory records.
//!
//! The system boundary is a key-value store holding two named records,
//! each the full serialized collection. Backends only move bytes; record
//! layout and schema versioning belong to the [store](crate::store).

pub mod file;
pub mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend's storage location could not be prepared.
    #[error("failed to prepare storage directory {path}: {source}")]
    Directory {
        /// Directory that could not be created.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be read.
    #[error("failed to read record {key}: {source}")]
    Read {
        /// Record key being read.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be written.
    #[error("failed to write record {key}: {source}")]
    Write {
        /// Record key being written.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Byte-level key-value persistence for whole-collection records.
pub trait StorageBackend {
    /// Fetch the raw bytes stored under `key`, or `None` if no record
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Overwrite the record under `key` with `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the write fails. Callers must
    /// surface the failure rather than dropping it.
    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}
