//! JSON persistence over a key-value backend
//!
//! `load` and `save` never fail: a missing or corrupt blob loads as the empty
//! value, and a failed write is logged and dropped. The `try_*` variants
//! expose the underlying error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::backend::KeyValueBackend;
use crate::Result;

/// Fixed namespaces for persisted planner state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Tasks,
    Categories,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Categories => "categories",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistent store adapter
pub struct PersistentStore {
    backend: Box<dyn KeyValueBackend>,
}

impl PersistentStore {
    pub fn new(backend: impl KeyValueBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Read and decode the value under `key`, `Ok(None)` when absent
    pub fn try_load<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>> {
        let Some(content) = self.backend.read(key.as_str())? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    /// Read the value under `key`, falling back to `T::default()`
    pub fn load<T: DeserializeOwned + Default>(&self, key: StorageKey) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("No stored value for '{}', starting empty", key);
                T::default()
            }
            Err(e) => {
                warn!("Failed to load '{}' from storage: {}", key, e);
                T::default()
            }
        }
    }

    /// Read a JSON array under `key`, decoding each element on its own
    ///
    /// Elements that fail to decode are logged and skipped. A blob that is
    /// not a JSON array loads as empty.
    pub fn load_records<T: DeserializeOwned>(&self, key: StorageKey) -> Vec<T> {
        let records: Vec<serde_json::Value> = self.load(key);
        let total = records.len();

        let mut decoded = Vec::with_capacity(total);
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<T>(record) {
                Ok(value) => decoded.push(value),
                Err(e) => {
                    warn!("Skipping record {} in '{}': {}", index, key, e);
                    continue;
                }
            }
        }

        if decoded.len() < total {
            warn!(
                "Loaded {} of {} records from '{}'",
                decoded.len(),
                total,
                key
            );
        }
        decoded
    }

    /// Encode and write `value` under `key`
    pub fn try_save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> Result<()> {
        let content = serde_json::to_string(value)?;
        self.backend.write(key.as_str(), &content)
    }

    /// Write `value` under `key`; returns false if the write was dropped
    pub fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> bool {
        match self.try_save(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save '{}' to storage: {}", key, e);
                false
            }
        }
    }
}
