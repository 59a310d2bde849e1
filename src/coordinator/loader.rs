//! Outbound seam: where load requests go.
//!
//! The coordinator never fetches anything. It hands each [`LoadRequest`]
//! to a [`ChallengeLoader`] and forgets about it; the owner performs the
//! fetch and reports back through `sync_displayed`.

use tokio::sync::mpsc::UnboundedSender;

use crate::query::LoadRequest;

pub trait ChallengeLoader {
    fn load_challenges_by_page(&mut self, request: LoadRequest);
}

impl<F> ChallengeLoader for F
where
    F: FnMut(LoadRequest),
{
    fn load_challenges_by_page(&mut self, request: LoadRequest) {
        self(request)
    }
}

/// Records requests in order.
impl ChallengeLoader for Vec<LoadRequest> {
    fn load_challenges_by_page(&mut self, request: LoadRequest) {
        self.push(request);
    }
}

/// Forwards requests to an async fetcher task.
impl ChallengeLoader for UnboundedSender<LoadRequest> {
    fn load_challenges_by_page(&mut self, request: LoadRequest) {
        if let Err(e) = self.send(request) {
            tracing::warn!("dropping load request, fetcher is gone: {}", e.0);
        }
    }
}
