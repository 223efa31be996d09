//! Display language

use serde::{Deserialize, Serialize};

use quran_reader_provider::Section;

/// Active display language.
///
/// Decides which section name is shown, which name field the catalog filter
/// searches and which label a new bookmark snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Original script; filtering is a literal substring match on `name_local`.
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    /// Filtering is a case-insensitive match on `name_english`.
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Language code (`ar` / `en`)
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }

    /// Parses a language code; unknown codes yield `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ar" => Some(Self::Arabic),
            "en" => Some(Self::English),
            _ => None,
        }
    }

    /// Display name of a section in this language
    #[must_use]
    pub fn section_name(self, section: &Section) -> &str {
        match self {
            Self::Arabic => &section.name_local,
            Self::English => &section.name_english,
        }
    }
}
