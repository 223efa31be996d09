//! Service layer module

mod bookmark_store;
mod navigation_controller;
mod request_sequencer;
mod section_catalog;
mod section_detail_loader;

pub use bookmark_store::{decode_bookmarks, encode_bookmarks, BookmarkStore};
pub use navigation_controller::{NavigationController, NavigationState, View};
pub use request_sequencer::RequestSequencer;
pub use section_catalog::{filter_sections, SectionCatalog};
pub use section_detail_loader::SectionDetailLoader;

use quran_reader_provider::ProviderError;

/// 按错误类型选择日志级别：预期错误用 warn，其余用 error
fn log_provider_error(context: &str, err: &ProviderError) {
    if err.is_expected() {
        log::warn!("{context}: {err}");
    } else {
        log::error!("{context}: {err}");
    }
}
