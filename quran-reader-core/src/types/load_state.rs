//! Fetch lifecycle state

use serde::Serialize;

/// State of a remote fetch as observed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "error", rename_all = "camelCase")]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last request failed; holds the error message for display
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Tag of one issued request. Only the latest ticket of a kind is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(pub(crate) u64);

impl RequestTicket {
    /// Sequence number of the request
    #[must_use]
    pub fn seq(self) -> u64 {
        self.0
    }
}
