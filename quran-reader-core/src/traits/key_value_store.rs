//! String key-value store abstraction

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{CoreError, CoreResult};

/// Persistent string key-value store (browser local storage or equivalent)
///
/// Platform implementation:
/// - In memory: `InMemoryKeyValueStore` (tests, ephemeral sessions)
/// - Desktop: `JsonFileStore` in `quran-reader-app`
///
/// Calls are synchronous; implementations are expected to be cheap enough to
/// run on the UI thread.
pub trait KeyValueStore: Send + Sync {
    /// Reads a value
    ///
    /// # Returns
    /// * `Ok(Some(value))` - key exists
    /// * `Ok(None)` - key does not exist
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Writes a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Deletes a value; deleting a missing key is not an error
    fn remove(&self, key: &str) -> CoreResult<()>;
}

/// In-memory key-value store
///
/// Default implementation, available on all platforms.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }
}

fn poisoned<T>(_: T) -> CoreError {
    CoreError::StorageError("in-memory store lock poisoned".to_string())
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.values.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.values
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.values.write().map_err(poisoned)?.remove(key);
        Ok(())
    }
}
