//! # quran-reader-provider
//!
//! Content provider abstraction for Quran reader front-ends.
//!
//! A provider exposes two operations: list all sections (surahs) and fetch one
//! section together with its items (ayahs). The bundled implementation talks to
//! the public [alquran.cloud](https://alquran.cloud/api) API.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation and mobile targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quran_reader_provider::{create_provider, ContentProvider, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(&ProviderConfig::default())?;
//!
//!     let sections = provider.list_sections().await?;
//!     for section in &sections {
//!         println!("{} {} ({} ayahs)", section.id, section.name_english, section.item_count);
//!     }
//!
//!     let detail = provider.get_section(1).await?;
//!     for item in &detail.items {
//!         println!("{}: {}", item.index_in_section, item.text);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Requests are sent once; there is no retry or backoff layer.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

/// Default API root of alquran.cloud.
pub const DEFAULT_BASE_URL: &str = "https://api.alquran.cloud/v1";

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::ContentProvider;

// Re-export types
pub use types::{Item, ProviderConfig, RevelationType, Section, SectionDetail};

// Re-export concrete providers
pub use providers::AlQuranCloudProvider;
