//! Monotonic request tagging

use crate::types::RequestTicket;

/// Issues increasing tickets for one kind of request.
///
/// Responses are applied only when they carry the latest ticket, so a slow
/// response to a superseded request can never overwrite a newer one.
/// Superseded requests are not cancelled; their responses are dropped.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new ticket, superseding every earlier one
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    #[must_use]
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest != 0 && ticket.0 == self.latest
    }

    /// Latest issued ticket, if any
    #[must_use]
    pub fn latest(&self) -> Option<RequestTicket> {
        (self.latest != 0).then_some(RequestTicket(self.latest))
    }
}
