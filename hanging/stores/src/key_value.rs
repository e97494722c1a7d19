use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unable to access store. path: {path}, cause: {cause}")]
    Io { path: PathBuf, cause: std::io::Error },
    #[error("Malformed store. path: {path}, cause: {cause}")]
    Malformed { path: PathBuf, cause: serde_json::Error },
    #[error("Store is unavailable")]
    Unavailable,
}

/// A string-to-string store, with no transactions.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// All entries in a single JSON object file.
///
/// The file is read on every access and rewritten on every change. A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(cause) if cause.kind() == ErrorKind::NotFound => {
                trace!("Store does not exist yet. path: {}", self.path.display());
                return Ok(BTreeMap::new());
            }
            Err(cause) => return Err(self.io_error(cause)),
        };

        serde_json::from_reader(BufReader::new(file)).map_err(|cause| StorageError::Malformed {
            path: self.path.clone(),
            cause,
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let file = File::create(&self.path).map_err(|cause| self.io_error(cause))?;
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(file, formatter);
        entries.serialize(&mut ser).map_err(|cause| StorageError::Malformed {
            path: self.path.clone(),
            cause,
        })?;

        let mut file = ser.into_inner();
        file.write_all(b"\n")
            .map_err(|cause| self.io_error(cause))?;

        Ok(())
    }

    fn io_error(&self, cause: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            cause,
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = self.load()?;
        Ok(entries.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
