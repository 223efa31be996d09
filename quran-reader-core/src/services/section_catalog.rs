//! Section catalog service

use std::sync::Arc;

use quran_reader_provider::ContentProvider;

use crate::error::CoreResult;
use crate::services::request_sequencer::RequestSequencer;
use crate::services::log_provider_error;
use crate::types::{Language, LoadState, RequestTicket, Section};

/// Filters sections by display name.
///
/// - `Arabic`: `name_local` contains `query` literally (no normalization)
/// - `English`: `name_english` contains `query`, ignoring case
///
/// An empty query returns every section. Order is preserved.
pub fn filter_sections<'a>(
    sections: &'a [Section],
    query: &str,
    language: Language,
) -> Vec<&'a Section> {
    if query.is_empty() {
        return sections.iter().collect();
    }

    match language {
        Language::Arabic => sections
            .iter()
            .filter(|s| s.name_local.contains(query))
            .collect(),
        Language::English => {
            let needle = query.to_lowercase();
            sections
                .iter()
                .filter(|s| s.name_english.to_lowercase().contains(&needle))
                .collect()
        }
    }
}

/// Catalog of all sections, fetched once and replaced wholesale on refetch.
pub struct SectionCatalog {
    provider: Arc<dyn ContentProvider>,
    sections: Vec<Section>,
    state: LoadState,
    sequencer: RequestSequencer,
}

impl SectionCatalog {
    #[must_use]
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            provider,
            sections: Vec::new(),
            state: LoadState::Idle,
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn provider(&self) -> &Arc<dyn ContentProvider> {
        &self.provider
    }

    /// Fetches the full section list and replaces the in-memory catalog.
    ///
    /// On failure the previous sections are kept and the error is returned
    /// after being logged. There is no retry.
    pub async fn fetch_all(&mut self) -> CoreResult<&[Section]> {
        let ticket = self.begin_fetch();
        self.fetch(ticket).await?;
        Ok(&self.sections)
    }

    /// Marks a fetch as in flight and returns its ticket.
    pub fn begin_fetch(&mut self) -> RequestTicket {
        self.state = LoadState::Loading;
        self.sequencer.issue()
    }

    /// Runs the request for `ticket` and applies the response.
    ///
    /// A superseded ticket returns `Ok(false)` without contacting the provider.
    pub async fn fetch(&mut self, ticket: RequestTicket) -> CoreResult<bool> {
        if !self.sequencer.is_latest(ticket) {
            log::debug!("Skipping superseded catalog request (ticket {})", ticket.seq());
            return Ok(false);
        }
        let result = self.provider.list_sections().await;
        self.finish_fetch(ticket, result)
    }

    /// Applies a response to the fetch identified by `ticket`.
    ///
    /// Returns `Ok(false)` when a newer fetch has been issued since; the
    /// response is dropped in that case, errors included.
    pub fn finish_fetch(
        &mut self,
        ticket: RequestTicket,
        result: quran_reader_provider::Result<Vec<Section>>,
    ) -> CoreResult<bool> {
        if !self.sequencer.is_latest(ticket) {
            log::debug!(
                "Dropping stale catalog response (ticket {}, latest {:?})",
                ticket.seq(),
                self.sequencer.latest().map(RequestTicket::seq)
            );
            return Ok(false);
        }

        match result {
            Ok(sections) => {
                log::info!("Catalog loaded: {} sections", sections.len());
                self.sections = sections;
                self.state = LoadState::Loaded;
                Ok(true)
            }
            Err(e) => {
                log_provider_error("Failed to load catalog", &e);
                self.state = LoadState::Failed(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Sections whose display name matches `query` (see [`filter_sections`])
    pub fn filter(&self, query: &str, language: Language) -> Vec<&Section> {
        filter_sections(&self.sections, query, language)
    }

    pub fn find(&self, section_id: u32) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Whether at least one fetch has succeeded
    pub fn is_loaded(&self) -> bool {
        !self.sections.is_empty() || self.state == LoadState::Loaded
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
    use crate::test_utils::{baqarah, create_mock_provider, fatihah, network_error, sample_catalog};

    fn ids(sections: &[&Section]) -> Vec<u32> {
        sections.iter().map(|s| s.id).collect()
    }

    #[test]
    fn empty_query_returns_all_in_order() {
        let catalog = sample_catalog();
        for lang in [Language::Arabic, Language::English] {
            let filtered = filter_sections(&catalog, "", lang);
            assert_eq!(ids(&filtered), vec![1, 2]);
        }
    }

    #[test]
    fn english_filter_ignores_case() {
        let catalog = sample_catalog();
        assert_eq!(ids(&filter_sections(&catalog, "baq", Language::English)), vec![2]);
        assert_eq!(
            ids(&filter_sections(&catalog, "al-baq", Language::English)),
            vec![2]
        );
        assert_eq!(
            ids(&filter_sections(&catalog, "AL-", Language::English)),
            vec![1, 2]
        );
        assert!(filter_sections(&catalog, "yasin", Language::English).is_empty());
    }

    #[test]
    fn arabic_filter_is_literal() {
        let catalog = sample_catalog();
        assert_eq!(
            ids(&filter_sections(&catalog, "البَقَرَةِ", Language::Arabic)),
            vec![2]
        );
        // undiacritized query does not match the vocalized name
        assert!(filter_sections(&catalog, "البقرة", Language::Arabic).is_empty());
        // the English field is not consulted in Arabic mode
        assert!(filter_sections(&catalog, "baq", Language::Arabic).is_empty());
    }

    #[tokio::test]
    async fn fetch_all_replaces_sections() {
        let provider = create_mock_provider();
        let mut catalog = SectionCatalog::new(provider.clone());
        assert_eq!(catalog.state(), &LoadState::Idle);
        assert!(!catalog.is_loaded());

        let sections = catalog.fetch_all().await.unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(catalog.state(), &LoadState::Loaded);
        assert_eq!(catalog.find(2), Some(&baqarah()));

        provider.set_sections(vec![fatihah()]).await;
        catalog.fetch_all().await.unwrap();
        assert_eq!(catalog.sections(), &[fatihah()]);
        assert_eq!(provider.list_calls(), 2);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_sections() {
        let provider = create_mock_provider();
        let mut catalog = SectionCatalog::new(provider.clone());
        catalog.fetch_all().await.unwrap();

        provider.set_failure(Some(network_error())).await;
        let result = catalog.fetch_all().await;

        assert!(matches!(result, Err(CoreError::Provider(_))));
        assert_eq!(catalog.sections().len(), 2);
        assert!(catalog.state().is_failed());
        assert!(catalog.is_loaded());
        assert_eq!(provider.list_calls(), 2);
    }

    #[tokio::test]
    async fn superseded_ticket_sends_no_request() {
        let provider = create_mock_provider();
        let mut catalog = SectionCatalog::new(provider.clone());

        let first = catalog.begin_fetch();
        let second = catalog.begin_fetch();

        assert!(!catalog.fetch(first).await.unwrap());
        assert_eq!(provider.list_calls(), 0);
        assert!(catalog.state().is_loading());

        assert!(catalog.fetch(second).await.unwrap());
        assert_eq!(provider.list_calls(), 1);
    }

    #[tokio::test]
    async fn stale_response_is_dropped() {
        let provider = create_mock_provider();
        let mut catalog = SectionCatalog::new(provider);

        let first = catalog.begin_fetch();
        let second = catalog.begin_fetch();

        assert!(catalog.finish_fetch(second, Ok(vec![baqarah()])).unwrap());
        assert!(!catalog.finish_fetch(first, Ok(sample_catalog())).unwrap());
        assert!(!catalog.finish_fetch(first, Err(network_error())).unwrap());

        assert_eq!(catalog.sections(), &[baqarah()]);
        assert_eq!(catalog.state(), &LoadState::Loaded);
    }
}
