//! File-backed storage: one JSON file per record key.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use super::{StorageBackend, StorageError};

/// Stores each record as `<data_dir>/<key>.json`.
///
/// Writes land in a sibling temp file and are renamed into place, so an
/// interrupted write never truncates the previous record.
#[derive(Debug)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Open a file store rooted at `data_dir`, creating the directory if
    /// it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Directory`] if the directory cannot be
    /// created.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|source| StorageError::Directory {
            path: data_dir.display().to_string(),
            source,
        })?;
        Ok(Self { data_dir })
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.record_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let tmp = self.data_dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, bytes)
            .and_then(|()| fs::rename(&tmp, self.record_path(key)))
            .map_err(|source| StorageError::Write {
                key: key.to_string(),
                source,
            })?;
        debug!(key, bytes = bytes.len(), "wrote record");
        Ok(())
    }
}
