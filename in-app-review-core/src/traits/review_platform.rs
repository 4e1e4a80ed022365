//! Capability contract every review backend implements

use std::fmt;
use std::ptr;

use async_trait::async_trait;

use crate::error::{ReviewError, ReviewResult};

/// Opaque identity token
///
/// Two tokens are equal only if they are the same `static`. The label is for
/// diagnostics and plays no part in the comparison.
pub struct VerifyToken {
    label: &'static str,
}

impl VerifyToken {
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl fmt::Debug for VerifyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerifyToken({} @ {:p})", self.label, ptr::from_ref(self))
    }
}

/// Construction stamp carried by every backend
#[derive(Debug, Clone, Copy)]
pub struct PlatformInterface {
    token: &'static VerifyToken,
}

impl PlatformInterface {
    pub const fn new(token: &'static VerifyToken) -> Self {
        Self { token }
    }

    /// Check that this stamp was made with `expected`
    pub fn verify(&self, expected: &'static VerifyToken) -> ReviewResult<()> {
        if ptr::eq(self.token, expected) {
            Ok(())
        } else {
            Err(ReviewError::Verification(format!(
                "backend was stamped with token `{}`, not the `{}` contract token",
                self.token.label(),
                expected.label()
            )))
        }
    }
}

static REVIEW_TOKEN: VerifyToken = VerifyToken::new("in-app-review");

/// Stamp for backends built on the review contract
///
/// Backends store the returned value and hand it back from
/// [`InAppReviewPlatform::interface`]; the registry rejects anything else.
pub fn review_interface() -> PlatformInterface {
    PlatformInterface::new(&REVIEW_TOKEN)
}

pub(crate) fn verify_review_backend(backend: &dyn InAppReviewPlatform) -> ReviewResult<()> {
    backend.interface().verify(&REVIEW_TOKEN)
}

/// In-app review capability Trait
///
/// New operations are added with a default body, so backends only override
/// what their platform supports.
#[async_trait]
pub trait InAppReviewPlatform: Send + Sync {
    /// Construction stamp, see [`review_interface`]
    fn interface(&self) -> &PlatformInterface;

    /// Whether the native review prompt can be shown on this device
    ///
    /// Never fails; anything that goes wrong reads as `false`.
    async fn is_available(&self) -> bool {
        false
    }

    /// Ask the OS to show its review prompt
    ///
    /// Success only means the request was handed over. The OS applies its own
    /// quota and may show nothing.
    async fn request_review(&self) -> ReviewResult<()> {
        Err(ReviewError::NotImplemented("requestReview".to_string()))
    }

    /// Open the store page of the app
    ///
    /// `app_store_id` is required on iOS and macOS, `microsoft_store_id` on Windows.
    async fn open_store_listing(
        &self,
        _app_store_id: Option<&str>,
        _microsoft_store_id: Option<&str>,
    ) -> ReviewResult<()> {
        Err(ReviewError::NotImplemented("openStoreListing".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static OTHER_TOKEN: VerifyToken = VerifyToken::new("in-app-review");

    struct BareBackend {
        interface: PlatformInterface,
    }

    #[async_trait]
    impl InAppReviewPlatform for BareBackend {
        fn interface(&self) -> &PlatformInterface {
            &self.interface
        }
    }

    #[tokio::test]
    async fn test_default_operations() {
        let backend = BareBackend {
            interface: review_interface(),
        };
        assert!(!backend.is_available().await);
        assert_eq!(
            backend.request_review().await,
            Err(ReviewError::NotImplemented("requestReview".to_string()))
        );
        assert_eq!(
            backend.open_store_listing(Some("1"), None).await,
            Err(ReviewError::NotImplemented("openStoreListing".to_string()))
        );
    }

    #[test]
    fn test_verify_compares_identity_not_label() {
        let genuine = BareBackend {
            interface: review_interface(),
        };
        let impostor = BareBackend {
            interface: PlatformInterface::new(&OTHER_TOKEN),
        };

        assert!(verify_review_backend(&genuine).is_ok());
        assert!(matches!(
            verify_review_backend(&impostor),
            Err(ReviewError::Verification(_))
        ));
    }
}
