//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::AlQuranCloudProvider;
use crate::traits::ContentProvider;
use crate::types::ProviderConfig;

/// Creates a [`ContentProvider`] from connection settings.
///
/// The returned provider is wrapped in `Arc<dyn ContentProvider>` so it can be
/// shared between the catalog and the detail loader.
///
/// # Examples
///
/// ```rust,no_run
/// use quran_reader_provider::{create_provider, ProviderConfig};
///
/// let provider = create_provider(&ProviderConfig::default()).unwrap();
/// ```
pub fn create_provider(config: &ProviderConfig) -> Result<Arc<dyn ContentProvider>> {
    Ok(Arc::new(AlQuranCloudProvider::new(config)?))
}
