//! 类型定义模块

mod bookmark;
mod language;
mod load_state;

pub use bookmark::{Bookmark, BookmarkKey};
pub use language::Language;
pub use load_state::{LoadState, RequestTicket};

// Re-export provider 库的公共类型
pub use quran_reader_provider::{Item, RevelationType, Section, SectionDetail};
