//! UI label lookup table
//!
//! Renderer-facing: front-ends look labels up here directly or through
//! [`NavigationController::label`](crate::NavigationController::label) for the
//! active language. Only static strings live here; there is no pluralization
//! or formatting logic beyond the numeral conversion used for item markers.

use crate::types::Language;

/// Labels the rendering layer asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    AppTitle,
    SearchPlaceholder,
    Bookmarks,
    ShowAll,
    Back,
    Loading,
    LoadFailed,
    NoBookmarks,
    Items,
    Meccan,
    Medinan,
    AddBookmark,
    RemoveBookmark,
}

/// Looks up the label text for a language
#[must_use]
pub fn label(language: Language, label: Label) -> &'static str {
    match (language, label) {
        (Language::Arabic, Label::AppTitle) => "القرآن الكريم",
        (Language::Arabic, Label::SearchPlaceholder) => "ابحث عن سورة",
        (Language::Arabic, Label::Bookmarks) => "العلامات المرجعية",
        (Language::Arabic, Label::ShowAll) => "كل السور",
        (Language::Arabic, Label::Back) => "رجوع",
        (Language::Arabic, Label::Loading) => "جار التحميل...",
        (Language::Arabic, Label::LoadFailed) => "تعذر التحميل",
        (Language::Arabic, Label::NoBookmarks) => "لا توجد علامات مرجعية",
        (Language::Arabic, Label::Items) => "آيات",
        (Language::Arabic, Label::Meccan) => "مكية",
        (Language::Arabic, Label::Medinan) => "مدنية",
        (Language::Arabic, Label::AddBookmark) => "إضافة علامة",
        (Language::Arabic, Label::RemoveBookmark) => "إزالة العلامة",

        (Language::English, Label::AppTitle) => "The Holy Quran",
        (Language::English, Label::SearchPlaceholder) => "Search surah",
        (Language::English, Label::Bookmarks) => "Bookmarks",
        (Language::English, Label::ShowAll) => "All surahs",
        (Language::English, Label::Back) => "Back",
        (Language::English, Label::Loading) => "Loading...",
        (Language::English, Label::LoadFailed) => "Failed to load",
        (Language::English, Label::NoBookmarks) => "No bookmarks yet",
        (Language::English, Label::Items) => "Ayahs",
        (Language::English, Label::Meccan) => "Meccan",
        (Language::English, Label::Medinan) => "Medinan",
        (Language::English, Label::AddBookmark) => "Add bookmark",
        (Language::English, Label::RemoveBookmark) => "Remove bookmark",
    }
}

/// Renders an item number in the language's digits (Arabic-Indic for `ar`).
#[must_use]
pub fn format_number(language: Language, number: u32) -> String {
    let digits = number.to_string();
    match language {
        Language::English => digits,
        Language::Arabic => digits
            .chars()
            .map(|c| match c.to_digit(10) {
                // U+0660 ARABIC-INDIC DIGIT ZERO
                Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
                None => c,
            })
            .collect(),
    }
}
