//! Reader configuration

use serde::{Deserialize, Serialize};

use quran_reader_provider::{ProviderConfig, DEFAULT_BASE_URL};

use crate::error::{CoreError, CoreResult};
use crate::types::Language;

/// Default key under which the bookmark blob is stored
pub const DEFAULT_STORAGE_KEY: &str = "quran-bookmarks";

/// Application configuration
///
/// Every field has a default, so a partial JSON document (or `{}`) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReaderConfig {
    /// Content API root
    pub api_base_url: String,
    /// Edition requested for section text, provider default when `None`
    pub edition: Option<String>,
    /// Key-value store key holding the bookmark blob
    pub storage_key: String,
    /// Initial display language
    pub language: Language,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            edition: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            language: Language::default(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

impl ReaderConfig {
    /// Parses and validates a JSON configuration document
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CoreError::ConfigError(format!("Invalid config document: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(CoreError::ConfigError("apiBaseUrl cannot be empty".to_string()));
        }
        if self.storage_key.trim().is_empty() {
            return Err(CoreError::ConfigError("storageKey cannot be empty".to_string()));
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(CoreError::ConfigError("timeouts must be at least one second".to_string()));
        }
        Ok(())
    }

    /// HTTP settings handed to the content provider
    #[must_use]
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            base_url: self.api_base_url.clone(),
            edition: self.edition.clone(),
            connect_timeout_secs: self.connect_timeout_secs,
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}
