//! Quran Reader Core Library
//!
//! Platform-independent view logic for a surah/ayah browser:
//! - Section catalog with name filtering (`SectionCatalog`)
//! - On-demand section loading (`SectionDetailLoader`)
//! - Bookmarks persisted to a key-value store (`BookmarkStore`)
//! - View state machine (`NavigationController`)
//!
//! Content comes from a [`quran_reader_provider::ContentProvider`]; persistence goes
//! through the [`KeyValueStore`] trait so each front-end supplies its own storage.

pub mod config;
pub mod error;
pub mod i18n;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{ReaderConfig, DEFAULT_STORAGE_KEY};
pub use error::{CoreError, CoreResult};
pub use i18n::Label;
pub use services::{
    BookmarkStore, NavigationController, NavigationState, SectionCatalog, SectionDetailLoader,
    View,
};
pub use traits::{InMemoryKeyValueStore, KeyValueStore};
pub use types::{Bookmark, BookmarkKey, Item, Language, LoadState, RequestTicket, Section};
