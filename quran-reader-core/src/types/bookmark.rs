//! Bookmark type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uniqueness key of a bookmark: (section id, item index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookmarkKey {
    pub section_id: u32,
    pub item_index: u32,
}

impl BookmarkKey {
    #[must_use]
    pub fn new(section_id: u32, item_index: u32) -> Self {
        Self {
            section_id,
            item_index,
        }
    }
}

/// A user-created pointer to one item.
///
/// `section_label` and `text` are snapshots taken when the bookmark was
/// created; they are never refreshed from later fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub section_id: u32,
    pub item_index: u32,
    /// Section display name in the language active at bookmark time
    pub section_label: String,
    /// Item text at bookmark time
    pub text: String,
    /// Creation time; absent in blobs written before it was recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Bookmark {
    /// Creates a bookmark stamped with the current time.
    #[must_use]
    pub fn new(
        section_id: u32,
        item_index: u32,
        section_label: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            section_id,
            item_index,
            section_label: section_label.into(),
            text: text.into(),
            created_at: Some(Utc::now()),
        }
    }

    #[must_use]
    pub fn key(&self) -> BookmarkKey {
        BookmarkKey::new(self.section_id, self.item_index)
    }

    /// Whether this bookmark points at `(section_id, item_index)`
    #[must_use]
    pub fn matches(&self, section_id: u32, item_index: u32) -> bool {
        self.section_id == section_id && self.item_index == item_index
    }
}
