//! Public data types returned by content providers.

use serde::{Deserialize, Serialize};

/// Where a section was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevelationType {
    Meccan,
    Medinan,
}

impl RevelationType {
    /// Parses the provider's spelling; matching is case-insensitive.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "meccan" | "makkah" | "makki" => Some(Self::Meccan),
            "medinan" | "madinah" | "madani" => Some(Self::Medinan),
            _ => None,
        }
    }
}

/// A top-level division of the text (a surah).
///
/// Immutable once fetched; identity is [`Section::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Stable section number, 1-based.
    pub id: u32,
    /// Name in the original script.
    pub name_local: String,
    /// Transliterated English name, e.g. `Al-Baqarah`.
    pub name_english: String,
    /// English meaning of the name, e.g. `The Cow`.
    pub name_translation: String,
    /// Number of items in the section.
    pub item_count: u32,
    pub revelation_type: RevelationType,
}

/// The smallest addressable unit within a section (an ayah).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub section_id: u32,
    /// 1-based, unique within the section.
    pub index_in_section: u32,
    pub text: String,
    /// Global item number across the whole text.
    pub number: u32,
    pub juz: u32,
    pub page: u32,
}

/// Response of "get section": the section plus its ordered items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDetail {
    pub section: Section,
    pub items: Vec<Item>,
}

/// Connection settings for creating a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// API root, without a trailing slash, e.g. `https://api.alquran.cloud/v1`.
    pub base_url: String,
    /// Optional edition identifier (`quran-uthmani`, `en.asad`, ...).
    /// `None` uses the provider's default edition.
    pub edition: Option<String>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_BASE_URL.to_string(),
            edition: None,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}
