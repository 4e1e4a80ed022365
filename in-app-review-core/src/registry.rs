//! Active backend registry
//!
//! Holds the one backend all review calls go through. The process-wide
//! registry starts with an unbound [`MethodChannelInAppReview`] and is
//! normally replaced once, when the host plugin registers.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::error::ReviewResult;
use crate::method_channel::MethodChannelInAppReview;
use crate::traits::{InAppReviewPlatform, verify_review_backend};

/// Registry for the active review backend
pub struct PlatformRegistry {
    active: RwLock<Arc<dyn InAppReviewPlatform>>,
}

impl PlatformRegistry {
    /// Create a registry seeded with `initial`, which must pass verification
    pub fn new(initial: Arc<dyn InAppReviewPlatform>) -> ReviewResult<Self> {
        verify_review_backend(initial.as_ref())?;
        Ok(Self {
            active: RwLock::new(initial),
        })
    }

    /// Currently active backend
    pub fn instance(&self) -> Arc<dyn InAppReviewPlatform> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the active backend
    ///
    /// A candidate not stamped with the review contract token is rejected and
    /// the active backend stays as it was.
    pub fn set_instance(&self, candidate: Arc<dyn InAppReviewPlatform>) -> ReviewResult<()> {
        if let Err(e) = verify_review_backend(candidate.as_ref()) {
            log::error!("Rejected review backend: {e}");
            return Err(e);
        }

        *self.active.write().unwrap_or_else(PoisonError::into_inner) = candidate;
        log::info!("Review backend replaced");
        Ok(())
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self {
            active: RwLock::new(Arc::new(MethodChannelInAppReview::unbound())),
        }
    }
}

static REGISTRY: LazyLock<PlatformRegistry> = LazyLock::new(PlatformRegistry::default);

/// Process-wide active backend
pub fn instance() -> Arc<dyn InAppReviewPlatform> {
    REGISTRY.instance()
}

/// Replace the process-wide active backend
pub fn set_instance(candidate: Arc<dyn InAppReviewPlatform>) -> ReviewResult<()> {
    REGISTRY.set_instance(candidate)
}
