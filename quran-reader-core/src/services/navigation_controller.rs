//! View navigation
//!
//! Owns the catalog, the detail loader and the bookmark store, and decides
//! which of them the rendering layer is looking at.
//!
//! ```text
//! Catalog --select_section(s)--------------> Detail(s)    (bookmarks_only := false)
//! Detail(s) --back-------------------------> Catalog      (bookmarks_only restored)
//! Catalog --toggle_bookmarks_only----------> Catalog      (flag flipped)
//! * --select_section_from_bookmark(s2)-----> Detail(s2)   (no-op if s2 unknown)
//! ```

use std::sync::Arc;

use quran_reader_provider::{ContentProvider, SectionDetail};
use serde::Serialize;

use crate::config::ReaderConfig;
use crate::error::{CoreError, CoreResult};
use crate::i18n::{self, Label};
use crate::services::{BookmarkStore, SectionCatalog, SectionDetailLoader};
use crate::traits::KeyValueStore;
use crate::types::{Bookmark, Item, Language, RequestTicket, RevelationType, Section};

/// Which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum View {
    #[default]
    Catalog,
    #[serde(rename_all = "camelCase")]
    Detail { section_id: u32 },
}

/// Navigation state exposed to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub view: View,
    /// Show the bookmark list instead of the catalog; only meaningful in `Catalog`
    pub bookmarks_only: bool,
    pub search_query: String,
    pub language: Language,
}

pub struct NavigationController {
    catalog: SectionCatalog,
    detail: SectionDetailLoader,
    bookmarks: BookmarkStore,
    state: NavigationState,
    /// `bookmarks_only` 在进入详情页前的值，返回时恢复
    bookmarks_only_before_detail: bool,
}

impl NavigationController {
    /// Wires the components around one provider and loads persisted bookmarks.
    pub fn new(
        provider: Arc<dyn ContentProvider>,
        store: Arc<dyn KeyValueStore>,
        config: &ReaderConfig,
    ) -> Self {
        let bookmarks = BookmarkStore::load(store, config.storage_key.clone());
        Self::from_parts(
            SectionCatalog::new(provider.clone()),
            SectionDetailLoader::new(provider),
            bookmarks,
            config.language,
        )
    }

    #[must_use]
    pub fn from_parts(
        catalog: SectionCatalog,
        detail: SectionDetailLoader,
        bookmarks: BookmarkStore,
        language: Language,
    ) -> Self {
        Self {
            catalog,
            detail,
            bookmarks,
            state: NavigationState {
                language,
                ..NavigationState::default()
            },
            bookmarks_only_before_detail: false,
        }
    }

    // ===== Catalog =====

    /// Fetches the section list.
    pub async fn load_catalog(&mut self) -> CoreResult<&[Section]> {
        self.catalog.fetch_all().await
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
    }

    pub fn set_language(&mut self, language: Language) {
        if self.state.language != language {
            log::debug!("Language switched to {}", language.code());
            self.state.language = language;
        }
    }

    /// Catalog filtered by the current search query and language
    pub fn visible_sections(&self) -> Vec<&Section> {
        self.catalog
            .filter(&self.state.search_query, self.state.language)
    }

    /// Bookmark list shown in bookmarks-only mode, in insertion order
    pub fn visible_bookmarks(&self) -> &[Bookmark] {
        self.bookmarks.bookmarks()
    }

    /// Flips bookmarks-only mode. Ignored outside the catalog view.
    ///
    /// Returns the flag after the call.
    pub fn toggle_bookmarks_only(&mut self) -> bool {
        if self.state.view == View::Catalog {
            self.state.bookmarks_only = !self.state.bookmarks_only;
        }
        self.state.bookmarks_only
    }

    // ===== Detail =====

    /// Switches to the detail view of `section` and starts loading it.
    ///
    /// The returned ticket identifies the response to pass to
    /// [`Self::complete_detail_load`] (or [`Self::fetch_detail`]).
    pub fn select_section(&mut self, section: &Section) -> RequestTicket {
        if self.state.view == View::Catalog {
            self.bookmarks_only_before_detail = self.state.bookmarks_only;
        }
        self.state.bookmarks_only = false;
        self.state.view = View::Detail {
            section_id: section.id,
        };
        self.detail.begin_load(section)
    }

    /// [`Self::select_section`] by id, looked up in the loaded catalog.
    ///
    /// Returns `None` and leaves the state untouched when the id is unknown.
    pub fn select_section_by_id(&mut self, section_id: u32) -> Option<RequestTicket> {
        let section = self.catalog.find(section_id)?.clone();
        Some(self.select_section(&section))
    }

    /// Jumps to the section of a bookmark.
    ///
    /// Needs the catalog: before it has loaded, or when it does not know
    /// `section_id`, this is a no-op returning `None`.
    pub fn select_section_from_bookmark(&mut self, section_id: u32) -> Option<RequestTicket> {
        let ticket = self.select_section_by_id(section_id);
        if ticket.is_none() {
            log::warn!(
                "Cannot open section {section_id} from bookmark: not in catalog (loaded: {})",
                self.catalog.is_loaded()
            );
        }
        ticket
    }

    /// Runs the detail request identified by `ticket`.
    pub async fn fetch_detail(&mut self, ticket: RequestTicket) -> CoreResult<bool> {
        self.detail.fetch(ticket).await
    }

    /// Applies a detail response obtained by the host.
    ///
    /// Returns `Ok(false)` when a newer selection superseded `ticket`.
    pub fn complete_detail_load(
        &mut self,
        ticket: RequestTicket,
        result: quran_reader_provider::Result<SectionDetail>,
    ) -> CoreResult<bool> {
        self.detail.finish_load(ticket, result)
    }

    /// Selects `section` and waits for its items.
    pub async fn open_section(&mut self, section: &Section) -> CoreResult<bool> {
        let ticket = self.select_section(section);
        self.fetch_detail(ticket).await
    }

    /// Opens the section of a bookmark; `Ok(false)` when it is not in the catalog.
    pub async fn open_bookmark(&mut self, section_id: u32) -> CoreResult<bool> {
        match self.select_section_from_bookmark(section_id) {
            Some(ticket) => self.fetch_detail(ticket).await,
            None => Ok(false),
        }
    }

    /// Returns to the catalog, restoring bookmarks-only mode as it was.
    ///
    /// Returns `false` when already in the catalog.
    pub fn back(&mut self) -> bool {
        match self.state.view {
            View::Catalog => false,
            View::Detail { .. } => {
                self.state.view = View::Catalog;
                self.state.bookmarks_only = self.bookmarks_only_before_detail;
                true
            }
        }
    }

    /// Section shown by the detail view, once its items have arrived
    pub fn current_section(&self) -> Option<&Section> {
        match self.state.view {
            View::Detail { section_id } => self.detail.selected().filter(|s| s.id == section_id),
            View::Catalog => None,
        }
    }

    /// Items of [`Self::current_section`]; empty while loading
    pub fn current_items(&self) -> &[Item] {
        if self.current_section().is_some() {
            self.detail.items()
        } else {
            &[]
        }
    }

    // ===== Bookmarks =====

    /// Toggles the bookmark on an item of the displayed section.
    ///
    /// Returns whether the item is bookmarked afterwards.
    pub fn toggle_bookmark(&mut self, item_index: u32) -> CoreResult<bool> {
        let View::Detail { section_id } = self.state.view else {
            return Err(CoreError::ValidationError("no section is open".to_string()));
        };
        let section = self
            .detail
            .selected()
            .filter(|s| s.id == section_id)
            .ok_or_else(|| {
                CoreError::ValidationError(format!("section {section_id} is not loaded yet"))
            })?;
        let item = self.detail.item(item_index).ok_or_else(|| {
            CoreError::ValidationError(format!(
                "item {item_index} does not exist in section {section_id}"
            ))
        })?;

        Ok(self
            .bookmarks
            .toggle_item(section, item, self.state.language))
    }

    pub fn remove_bookmark(&mut self, section_id: u32, item_index: u32) -> &[Bookmark] {
        self.bookmarks.remove(section_id, item_index)
    }

    pub fn is_bookmarked(&self, section_id: u32, item_index: u32) -> bool {
        self.bookmarks.contains(section_id, item_index)
    }

    // ===== Display =====

    /// Label text in the active language
    pub fn label(&self, label: Label) -> &'static str {
        i18n::label(self.state.language, label)
    }

    /// Display name of `section` in the active language
    pub fn section_title<'a>(&self, section: &'a Section) -> &'a str {
        self.state.language.section_name(section)
    }

    /// Item number marker in the active language's digits
    pub fn item_marker(&self, item: &Item) -> String {
        i18n::format_number(self.state.language, item.index_in_section)
    }

    /// Revelation place label of `section`
    pub fn revelation_label(&self, section: &Section) -> &'static str {
        let label = match section.revelation_type {
            RevelationType::Meccan => Label::Meccan,
            RevelationType::Medinan => Label::Medinan,
        };
        self.label(label)
    }

    // ===== Accessors =====

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn catalog(&self) -> &SectionCatalog {
        &self.catalog
    }

    pub fn detail(&self) -> &SectionDetailLoader {
        &self.detail
    }

    pub fn bookmarks(&self) -> &BookmarkStore {
        &self.bookmarks
    }
}
