//! alquran.cloud content provider
//!
//! API reference: <https://alquran.cloud/api>

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{create_http_client, is_valid_edition, normalize_base_url};
use crate::traits::ProviderErrorMapper;
use crate::types::ProviderConfig;

pub(crate) use types::{AlQuranAyah, AlQuranEnvelope, AlQuranSurah, AlQuranSurahDetail};

pub(crate) const PROVIDER_ID: &str = "alquran-cloud";

/// alquran.cloud content provider
pub struct AlQuranCloudProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) edition: Option<String>,
}

impl AlQuranCloudProvider {
    /// Creates a provider from connection settings.
    ///
    /// Fails when the base URL is empty or the edition identifier contains
    /// characters that are not valid in a path segment.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url);
        let provider = Self {
            client: create_http_client(config, PROVIDER_ID)?,
            base_url,
            edition: config.edition.clone(),
        };

        if provider.base_url.is_empty() {
            return Err(provider.invalid_parameter("base_url", "base URL must not be empty"));
        }
        if let Some(edition) = &provider.edition
            && !is_valid_edition(edition)
        {
            return Err(provider.invalid_parameter(
                "edition",
                format!("invalid edition identifier: {edition}"),
            ));
        }

        Ok(provider)
    }

    /// Edition requested for section detail calls, if any.
    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }
}
