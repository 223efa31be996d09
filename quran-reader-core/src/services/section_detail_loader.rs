//! Section detail loading

use std::sync::Arc;

use quran_reader_provider::{ContentProvider, SectionDetail};

use crate::error::CoreResult;
use crate::services::log_provider_error;
use crate::services::request_sequencer::RequestSequencer;
use crate::types::{Item, LoadState, RequestTicket, Section};

/// Loads the items of one selected section at a time.
///
/// Selecting another section discards the previous item set; visited
/// sections are not cached.
pub struct SectionDetailLoader {
    provider: Arc<dyn ContentProvider>,
    /// 当前已加载的章节
    selected: Option<Section>,
    /// 正在请求中的章节
    pending: Option<Section>,
    items: Vec<Item>,
    state: LoadState,
    sequencer: RequestSequencer,
}

impl SectionDetailLoader {
    #[must_use]
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            provider,
            selected: None,
            pending: None,
            items: Vec::new(),
            state: LoadState::Idle,
            sequencer: RequestSequencer::new(),
        }
    }

    /// Fetches `section` and replaces the current item set.
    pub async fn load_items(&mut self, section: &Section) -> CoreResult<&[Item]> {
        let ticket = self.begin_load(section);
        self.fetch(ticket).await?;
        Ok(&self.items)
    }

    /// Marks `section` as requested and returns the ticket for its response.
    ///
    /// Items of the previously selected section stay readable until the
    /// response arrives.
    pub fn begin_load(&mut self, section: &Section) -> RequestTicket {
        log::debug!("Loading section {} ({})", section.id, section.name_english);
        self.pending = Some(section.clone());
        self.state = LoadState::Loading;
        self.sequencer.issue()
    }

    /// Runs the request for the pending section and applies the response.
    ///
    /// Returns `Ok(false)` without contacting the provider when nothing is
    /// pending or the ticket is stale.
    pub async fn fetch(&mut self, ticket: RequestTicket) -> CoreResult<bool> {
        if !self.sequencer.is_latest(ticket) {
            log::debug!("Skipping superseded section request (ticket {})", ticket.seq());
            return Ok(false);
        }
        let Some(section_id) = self.pending.as_ref().map(|s| s.id) else {
            return Ok(false);
        };
        let result = self.provider.get_section(section_id).await;
        self.finish_load(ticket, result)
    }

    /// Applies a "get section" response.
    ///
    /// A response whose ticket is not the latest issued is dropped and
    /// `Ok(false)` is returned. On failure the previous items are kept and
    /// the state becomes [`LoadState::Failed`].
    pub fn finish_load(
        &mut self,
        ticket: RequestTicket,
        result: quran_reader_provider::Result<SectionDetail>,
    ) -> CoreResult<bool> {
        if !self.sequencer.is_latest(ticket) {
            log::debug!(
                "Dropping stale section response (ticket {}, latest {:?})",
                ticket.seq(),
                self.sequencer.latest().map(RequestTicket::seq)
            );
            return Ok(false);
        }

        let requested = self.pending.take();
        match result {
            Ok(detail) => {
                if let Some(mismatch) = requested
                    .as_ref()
                    .filter(|r| r.id != detail.section.id)
                {
                    log::warn!(
                        "Section response id {} does not match request {}",
                        detail.section.id,
                        mismatch.id
                    );
                }
                log::info!(
                    "Section {} loaded: {} items",
                    detail.section.id,
                    detail.items.len()
                );
                // 以请求时的章节为准，保持与目录一致
                self.selected = Some(requested.unwrap_or(detail.section));
                self.items = detail.items;
                self.state = LoadState::Loaded;
                Ok(true)
            }
            Err(e) => {
                log_provider_error("Failed to load section", &e);
                self.state = LoadState::Failed(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Section whose items are currently held
    pub fn selected(&self) -> Option<&Section> {
        self.selected.as_ref()
    }

    /// Section whose request is in flight
    pub fn pending(&self) -> Option<&Section> {
        self.pending.as_ref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item by its 1-based index within the selected section
    pub fn item(&self, index_in_section: u32) -> Option<&Item> {
        self.items
            .iter()
            .find(|i| i.index_in_section == index_in_section)
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{baqarah, create_mock_provider, detail_for, fatihah, network_error};

    #[tokio::test]
    async fn load_items_replaces_previous_section() {
        let provider = create_mock_provider();
        let mut loader = SectionDetailLoader::new(provider.clone());
        assert!(loader.selected().is_none());

        let items = loader.load_items(&baqarah()).await.unwrap();
        assert_eq!(items.len(), 286);
        assert_eq!(loader.selected().map(|s| s.id), Some(2));

        loader.load_items(&fatihah()).await.unwrap();
        assert_eq!(loader.items().len(), 7);
        assert!(loader.items().iter().all(|i| i.section_id == 1));
        assert_eq!(loader.selected().map(|s| s.id), Some(1));
        assert_eq!(loader.state(), &LoadState::Loaded);
        assert_eq!(provider.detail_calls(), 2);
    }

    #[tokio::test]
    async fn item_lookup_by_index() {
        let mut loader = SectionDetailLoader::new(create_mock_provider());
        loader.load_items(&fatihah()).await.unwrap();

        assert_eq!(
            loader.item(5).map(|i| i.text.as_str()),
            Some("item 5 of section 1")
        );
        assert!(loader.item(0).is_none());
        assert!(loader.item(8).is_none());
    }

    #[tokio::test]
    async fn failure_keeps_items_and_records_state() {
        let provider = create_mock_provider();
        let mut loader = SectionDetailLoader::new(provider.clone());
        loader.load_items(&fatihah()).await.unwrap();

        provider.set_failure(Some(network_error())).await;
        let result = loader.load_items(&baqarah()).await;

        assert!(matches!(result, Err(CoreError::Provider(_))));
        assert!(loader.state().is_failed());
        assert_eq!(loader.items().len(), 7);
        assert_eq!(loader.selected().map(|s| s.id), Some(1));
        assert!(loader.pending().is_none());
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut loader = SectionDetailLoader::new(create_mock_provider());

        let slow = loader.begin_load(&baqarah());
        let fast = loader.begin_load(&fatihah());
        assert_eq!(loader.pending().map(|s| s.id), Some(1));
        assert!(loader.state().is_loading());

        assert!(loader.finish_load(fast, Ok(detail_for(&fatihah()))).unwrap());
        assert!(!loader.finish_load(slow, Ok(detail_for(&baqarah()))).unwrap());

        assert_eq!(loader.selected().map(|s| s.id), Some(1));
        assert_eq!(loader.items().len(), 7);
        assert_eq!(loader.state(), &LoadState::Loaded);
    }

    #[tokio::test]
    async fn superseded_ticket_sends_no_request() {
        let provider = create_mock_provider();
        let mut loader = SectionDetailLoader::new(provider.clone());

        let slow = loader.begin_load(&baqarah());
        let fast = loader.begin_load(&fatihah());

        assert!(!loader.fetch(slow).await.unwrap());
        assert_eq!(provider.detail_calls(), 0);
        assert_eq!(loader.pending().map(|s| s.id), Some(1));

        assert!(loader.fetch(fast).await.unwrap());
        assert_eq!(provider.detail_calls(), 1);
        assert_eq!(loader.selected().map(|s| s.id), Some(1));
    }

    #[test]
    fn stale_failure_does_not_mark_failed() {
        let mut loader = SectionDetailLoader::new(create_mock_provider());

        let slow = loader.begin_load(&baqarah());
        let fast = loader.begin_load(&fatihah());
        loader.finish_load(fast, Ok(detail_for(&fatihah()))).unwrap();

        assert!(!loader.finish_load(slow, Err(network_error())).unwrap());
        assert_eq!(loader.state(), &LoadState::Loaded);
    }
}
