//! Platform-agnostic application bootstrap for Quran Reader.
//!
//! Provides `ReaderApp` (component container), `ReaderAppBuilder` (adapter
//! injection) and configuration file loading.

pub mod adapters;

use std::path::Path;
use std::sync::Arc;

use quran_reader_core::error::{CoreError, CoreResult};
use quran_reader_core::traits::KeyValueStore;
use quran_reader_core::{NavigationController, ReaderConfig};
use quran_reader_provider::{create_provider, ContentProvider};

/// Loads a JSON configuration file.
///
/// A missing file yields the default configuration.
///
/// # Errors
/// Returns `ConfigError` if the file cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> CoreResult<ReaderConfig> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("Config file {} not found, using defaults", path.display());
        return Ok(ReaderConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CoreError::ConfigError(format!("Failed to read {}: {e}", path.display()))
    })?;
    ReaderConfig::from_json_str(&content)
}

/// Platform-agnostic application state.
///
/// Every front-end constructs this once at startup via `ReaderAppBuilder`.
pub struct ReaderApp {
    config: ReaderConfig,
    navigation: NavigationController,
}

impl ReaderApp {
    /// Startup sequence: fetch the catalog.
    ///
    /// A failed fetch is logged and recorded in the catalog's load state; the
    /// app stays usable (bookmarks are already loaded) and the host can retry
    /// with [`NavigationController::load_catalog`].
    pub async fn run_startup(&mut self) {
        match self.navigation.load_catalog().await {
            Ok(sections) => log::info!("Startup complete: {} sections", sections.len()),
            Err(e) if e.is_expected() => log::warn!("Startup catalog fetch failed: {e}"),
            Err(e) => log::error!("Startup catalog fetch failed: {e}"),
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationController {
        &mut self.navigation
    }
}

/// Builder for constructing `ReaderApp` with platform-specific adapters.
///
/// # Required adapters
/// - `key_value_store`: where bookmarks are persisted
///
/// # Optional
/// - `config`: defaults to `ReaderConfig::default()`
/// - `provider`: defaults to the provider built from `config`
pub struct ReaderAppBuilder {
    config: Option<ReaderConfig>,
    key_value_store: Option<Arc<dyn KeyValueStore>>,
    provider: Option<Arc<dyn ContentProvider>>,
}

impl ReaderAppBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            key_value_store: None,
            provider: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: ReaderConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn key_value_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.key_value_store = Some(store);
        self
    }

    #[must_use]
    pub fn provider(mut self, provider: Arc<dyn ContentProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Build the `ReaderApp`.
    ///
    /// # Errors
    /// - `ValidationError` if the key-value store is missing
    /// - `ConfigError` if the configuration is invalid
    /// - `Provider` if the default provider cannot be created
    pub fn build(self) -> CoreResult<ReaderApp> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let store = self.key_value_store.ok_or_else(|| {
            CoreError::ValidationError("key_value_store is required".to_string())
        })?;
        let provider = match self.provider {
            Some(provider) => provider,
            None => create_provider(&config.provider_config())?,
        };
        log::info!(
            "Reader app using provider '{}', language '{}'",
            provider.id(),
            config.language.code()
        );

        let navigation = NavigationController::new(provider, store, &config);

        Ok(ReaderApp { config, navigation })
    }
}

impl Default for ReaderAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
