//! JSON file backed key-value store.
//!
//! The whole file is a single JSON object mapping keys to string values. It is
//! read once on open and rewritten on every `set`/`remove`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use quran_reader_core::error::{CoreError, CoreResult};
use quran_reader_core::traits::KeyValueStore;

const MAX_STORE_FILE_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Key-value store persisted to one JSON file.
///
/// A missing file is treated as an empty store; parent directories are
/// created on first write.
pub struct JsonFileStore {
    path: PathBuf,
    cache: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading existing entries.
    ///
    /// # Errors
    /// Returns `StorageError` if the file cannot be read or is too large, and
    /// `SerializationError` if it is not a JSON object of strings.
    pub fn open(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = Self::read_file(&path)?;
        log::debug!("Opened store {} ({} keys)", path.display(), entries.len());

        Ok(Self {
            path,
            cache: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(path: &Path) -> CoreResult<BTreeMap<String, String>> {
        if !path.exists() {
            log::debug!("Store file does not exist: {}", path.display());
            return Ok(BTreeMap::new());
        }

        let metadata = fs::metadata(path).map_err(|e| {
            CoreError::StorageError(format!("Failed to read store file metadata: {e}"))
        })?;
        if metadata.len() > MAX_STORE_FILE_SIZE {
            return Err(CoreError::StorageError(format!(
                "Store file too large: {} bytes (max: {} bytes)",
                metadata.len(),
                MAX_STORE_FILE_SIZE
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CoreError::StorageError(format!("Failed to read store file: {e}")))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(format!("Invalid store format: {e}")))
    }

    /// 先写临时文件再 rename，避免写一半的文件
    fn write_file(&self, entries: &BTreeMap<String, String>) -> CoreResult<()> {
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                CoreError::StorageError(format!("Failed to create store directory: {e}"))
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .map_err(|e| CoreError::StorageError(format!("Failed to write store file: {e}")))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| CoreError::StorageError(format!("Failed to replace store file: {e}")))
    }

    fn lock_error() -> CoreError {
        CoreError::StorageError("store lock poisoned".to_string())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let cache = self.cache.read().map_err(|_| Self::lock_error())?;
        Ok(cache.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut cache = self.cache.write().map_err(|_| Self::lock_error())?;
        let mut next = cache.clone();
        next.insert(key.to_string(), value.to_string());
        self.write_file(&next)?;
        *cache = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        let mut cache = self.cache.write().map_err(|_| Self::lock_error())?;
        if !cache.contains_key(key) {
            return Ok(());
        }
        let mut next = cache.clone();
        next.remove(key);
        self.write_file(&next)?;
        *cache = next;
        Ok(())
    }
}
