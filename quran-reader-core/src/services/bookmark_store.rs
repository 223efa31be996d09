//! Bookmark collection with write-through persistence

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::KeyValueStore;
use crate::types::{Bookmark, BookmarkKey, Item, Language, Section};

/// Decodes a persisted bookmark blob.
///
/// A missing or malformed blob yields an empty collection. Records repeating
/// an earlier key are dropped so the uniqueness invariant holds even for
/// hand-edited blobs.
pub fn decode_bookmarks(blob: Option<&str>) -> Vec<Bookmark> {
    let Some(blob) = blob else {
        return Vec::new();
    };

    let parsed: Vec<Bookmark> = match serde_json::from_str(blob) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Ignoring malformed bookmark data: {e}");
            return Vec::new();
        }
    };

    let mut seen = HashSet::with_capacity(parsed.len());
    let total = parsed.len();
    let bookmarks: Vec<Bookmark> = parsed.into_iter().filter(|b| seen.insert(b.key())).collect();
    if bookmarks.len() != total {
        log::warn!(
            "Dropped {} duplicate bookmark(s) from stored data",
            total - bookmarks.len()
        );
    }
    bookmarks
}

/// Encodes bookmarks as a JSON array, preserving order.
pub fn encode_bookmarks(bookmarks: &[Bookmark]) -> CoreResult<String> {
    serde_json::to_string(bookmarks).map_err(|e| CoreError::SerializationError(e.to_string()))
}

/// Ordered bookmark collection, unique by `(section_id, item_index)`.
///
/// Every mutation rewrites the whole blob under `key`. Write failures are
/// logged and swallowed; the in-memory collection stays authoritative.
pub struct BookmarkStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    bookmarks: Vec<Bookmark>,
    /// 最近一次 toggle 移除的记录，紧接着重新添加同一 key 时沿用其创建时间
    last_toggled_off: Option<Bookmark>,
}

impl BookmarkStore {
    /// Loads the collection persisted under `key`.
    ///
    /// Never fails: read errors and bad data start an empty collection.
    pub fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let blob = match store.get(&key) {
            Ok(blob) => blob,
            Err(e) => {
                log::error!("Failed to read bookmarks from '{key}': {e}");
                None
            }
        };
        let bookmarks = decode_bookmarks(blob.as_deref());
        log::debug!("Loaded {} bookmark(s) from '{key}'", bookmarks.len());

        Self {
            store,
            key,
            bookmarks,
            last_toggled_off: None,
        }
    }

    /// Overwrites the persisted blob with the current collection.
    pub fn persist(&self) -> CoreResult<()> {
        let blob = encode_bookmarks(&self.bookmarks)?;
        self.store.set(&self.key, &blob)
    }

    fn persist_best_effort(&self) {
        if let Err(e) = self.persist() {
            log::error!("Failed to persist bookmarks to '{}': {e}", self.key);
        }
    }

    /// Removes the bookmark at `(section_id, item_index)` if present,
    /// otherwise appends a new snapshot. Persists before returning.
    ///
    /// Re-adding a key right after toggling it off keeps its original
    /// `created_at`, so toggling the last bookmark twice is an identity.
    pub fn toggle(
        &mut self,
        section_id: u32,
        item_index: u32,
        section_label: impl Into<String>,
        text: impl Into<String>,
    ) -> &[Bookmark] {
        if let Some(pos) = self.position(section_id, item_index) {
            self.last_toggled_off = Some(self.bookmarks.remove(pos));
            log::debug!("Bookmark removed: {section_id}:{item_index}");
        } else {
            let mut bookmark = Bookmark::new(section_id, item_index, section_label, text);
            if let Some(previous) = self
                .last_toggled_off
                .take()
                .filter(|b| b.matches(section_id, item_index))
            {
                bookmark.created_at = previous.created_at;
            }
            self.bookmarks.push(bookmark);
            log::debug!("Bookmark added: {section_id}:{item_index}");
        }
        self.persist_best_effort();
        &self.bookmarks
    }

    /// Toggles `item`, snapshotting the section name shown in `language`.
    ///
    /// Returns whether the item is bookmarked afterwards.
    pub fn toggle_item(&mut self, section: &Section, item: &Item, language: Language) -> bool {
        self.toggle(
            section.id,
            item.index_in_section,
            language.section_name(section),
            item.text.as_str(),
        );
        self.contains(section.id, item.index_in_section)
    }

    pub fn contains(&self, section_id: u32, item_index: u32) -> bool {
        self.position(section_id, item_index).is_some()
    }

    /// Removes a bookmark; absent keys are a no-op and skip the write.
    pub fn remove(&mut self, section_id: u32, item_index: u32) -> &[Bookmark] {
        self.last_toggled_off = None;
        if let Some(pos) = self.position(section_id, item_index) {
            self.bookmarks.remove(pos);
            log::debug!("Bookmark removed: {section_id}:{item_index}");
            self.persist_best_effort();
        }
        &self.bookmarks
    }

    pub fn find(&self, section_id: u32, item_index: u32) -> Option<&Bookmark> {
        self.bookmarks
            .iter()
            .find(|b| b.matches(section_id, item_index))
    }

    /// Bookmarks in insertion order
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn keys(&self) -> impl Iterator<Item = BookmarkKey> + '_ {
        self.bookmarks.iter().map(Bookmark::key)
    }

    pub fn for_section(&self, section_id: u32) -> Vec<&Bookmark> {
        self.bookmarks
            .iter()
            .filter(|b| b.section_id == section_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// Storage key of the persisted blob
    pub fn key(&self) -> &str {
        &self.key
    }

    fn position(&self, section_id: u32, item_index: u32) -> Option<usize> {
        self.bookmarks
            .iter()
            .position(|b| b.matches(section_id, item_index))
    }
}
