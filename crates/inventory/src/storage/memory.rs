//! In-memory storage for tests.

use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{StorageBackend, StorageError};

/// In-memory backend implementing the key-value contract.
///
/// The write-failure switch lets tests exercise storage-error propagation
/// without a real filesystem fault, and keeps working after the backend
/// has moved into a store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, Vec<u8>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStore {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that toggles write failures on this backend.
    #[must_use]
    pub fn write_failure_switch(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.fail_writes)
    }

    /// Seed a record with raw bytes (e.g. a corrupt payload).
    pub fn insert_raw(&mut self, key: impl Into<String>, bytes: Vec<u8>) {
        self.records.insert(key.into(), bytes);
    }

    /// Raw bytes currently stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&[u8]> {
        self.records.get(key).map(Vec::as_slice)
    }
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StorageError::Write {
                key: key.to_string(),
                source: io::Error::other("writes disabled by test switch"),
            });
        }
        self.records.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
