//! Application-facing entry point

use crate::error::ReviewResult;
use crate::registry;
use crate::types::ReviewAvailability;

/// Review API for application code
///
/// Every call goes to whichever backend is active in the process-wide
/// registry at the time of the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct InAppReview;

impl InAppReview {
    pub fn instance() -> Self {
        Self
    }

    /// Whether the native review prompt can be shown. Never fails.
    pub async fn is_available(&self) -> bool {
        registry::instance().is_available().await
    }

    /// Probe availability as the tri-state the UI tracks
    pub async fn availability(&self) -> ReviewAvailability {
        ReviewAvailability::from(self.is_available().await)
    }

    /// Ask the OS for its review prompt
    ///
    /// The OS may decide not to show anything; `Ok` does not mean a prompt was shown.
    pub async fn request_review(&self) -> ReviewResult<()> {
        registry::instance().request_review().await
    }

    /// Open the store page for a manual review
    pub async fn open_store_listing(
        &self,
        app_store_id: Option<&str>,
        microsoft_store_id: Option<&str>,
    ) -> ReviewResult<()> {
        registry::instance()
            .open_store_listing(app_store_id, microsoft_store_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The process-wide backend is unbound here, so availability reads false
    #[tokio::test]
    async fn test_unbound_backend_is_unavailable() {
        let review = InAppReview::instance();
        assert!(!review.is_available().await);
        assert_eq!(review.availability().await, ReviewAvailability::Unavailable);
    }
}
