//! Stores are for loading/storing presets and preferences.
//!
//! Everything is kept in a simple key-value store, where each value is a string. Structured values, such as the
//! list of presets, are stored as JSON text.
//!
//! Example store backends:
//! * Files (JSON).
//! * Memory, used when the file can't be read or written.
pub mod key_value;
pub mod preferences;
pub mod presets;
pub mod storage;

pub use key_value::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
pub use storage::Storage;
