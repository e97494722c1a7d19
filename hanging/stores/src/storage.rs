use tracing::warn;

use crate::key_value::{KeyValueStore, MemoryStore, StorageError};

/// A key-value store that never fails.
///
/// When the backend fails, e.g. the file can't be written, a warning is logged and the storage continues in
/// memory, so storage problems never block a calculation. Once in memory, it stays in memory.
///
/// Values read from or written to the backend are also kept in memory, so they are still there after a failure.
pub struct Storage {
    backend: Box<dyn KeyValueStore>,
    fallback: MemoryStore,
    unavailable: bool,
}

impl Storage {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            fallback: MemoryStore::default(),
            unavailable: false,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }

    /// `false` once the backend has failed and values are only kept in memory.
    pub fn is_available(&self) -> bool {
        !self.unavailable
    }

    pub fn get(&mut self, key: &str) -> Option<String> {
        if !self.unavailable {
            match self.backend.get(key) {
                Ok(value) => {
                    self.remember(key, value.as_deref());
                    return value;
                }
                Err(error) => self.degrade(error),
            }
        }
        self.fallback.get(key).unwrap_or_default()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        if !self.unavailable {
            match self.backend.set(key, value) {
                Ok(()) => {
                    self.remember(key, Some(value));
                    return;
                }
                Err(error) => self.degrade(error),
            }
        }
        self.remember(key, Some(value));
    }

    pub fn remove(&mut self, key: &str) {
        if !self.unavailable {
            match self.backend.remove(key) {
                Ok(()) => {
                    self.remember(key, None);
                    return;
                }
                Err(error) => self.degrade(error),
            }
        }
        self.remember(key, None);
    }

    fn remember(&mut self, key: &str, value: Option<&str>) {
        // `MemoryStore` never fails
        let _ = match value {
            Some(value) => self.fallback.set(key, value),
            None => self.fallback.remove(key),
        };
    }

    fn degrade(&mut self, error: StorageError) {
        warn!("Storage unavailable, continuing in memory. cause: {}", error);
        self.unavailable = true;
    }
}
