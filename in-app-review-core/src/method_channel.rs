//! Default backend: forwards every operation to the native handler over a channel

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::{ReviewError, ReviewResult};
use crate::store_url::{microsoft_store_review_url, normalize_store_id};
use crate::traits::{
    InAppReviewPlatform, METHOD_IS_AVAILABLE, METHOD_OPEN_STORE_LISTING, METHOD_REQUEST_REVIEW,
    PlatformInterface, ReviewChannel, UnboundChannel, UnboundLauncher, UrlLauncher,
    review_interface,
};
use crate::types::TargetPlatform;

/// Channel-backed review backend
///
/// Argument shape and applicability are decided per [`TargetPlatform`]:
///
/// | Platform | `open_store_listing` |
/// |----------|----------------------|
/// | iOS / macOS | forwards `appStoreId` (required) |
/// | Android | forwards without arguments |
/// | Windows | launches `ms-windows-store://` directly (requires `microsoftStoreId`) |
/// | others | `UnsupportedPlatform` |
pub struct MethodChannelInAppReview {
    interface: PlatformInterface,
    channel: Arc<dyn ReviewChannel>,
    launcher: Arc<dyn UrlLauncher>,
    platform: TargetPlatform,
}

impl MethodChannelInAppReview {
    pub fn new(
        channel: Arc<dyn ReviewChannel>,
        launcher: Arc<dyn UrlLauncher>,
        platform: TargetPlatform,
    ) -> Self {
        Self {
            interface: review_interface(),
            channel,
            launcher,
            platform,
        }
    }

    /// Backend for the compile target with no native handler attached yet
    pub fn unbound() -> Self {
        Self::new(
            Arc::new(UnboundChannel),
            Arc::new(UnboundLauncher),
            TargetPlatform::current(),
        )
    }

    pub fn platform(&self) -> &TargetPlatform {
        &self.platform
    }

    async fn forward(&self, method: &str, args: Option<Value>) -> ReviewResult<Option<Value>> {
        log::debug!("{} -> {method} ({})", self.channel.name(), self.platform);
        self.channel
            .invoke(method, args)
            .await
            .map_err(ReviewError::from)
    }

    fn require<'a>(&self, id: Option<&'a str>, argument: &str) -> ReviewResult<&'a str> {
        normalize_store_id(id).ok_or_else(|| ReviewError::MissingArgument {
            argument: argument.to_string(),
            platform: self.platform.name().to_string(),
        })
    }
}

#[async_trait]
impl InAppReviewPlatform for MethodChannelInAppReview {
    fn interface(&self) -> &PlatformInterface {
        &self.interface
    }

    async fn is_available(&self) -> bool {
        if self.platform == TargetPlatform::Web {
            return false;
        }

        match self.forward(METHOD_IS_AVAILABLE, None).await {
            Ok(Some(Value::Bool(available))) => available,
            Ok(other) => {
                log::debug!("{METHOD_IS_AVAILABLE} returned {other:?}, treating as unavailable");
                false
            }
            Err(e) => {
                log::debug!("{METHOD_IS_AVAILABLE} failed, treating as unavailable: {e}");
                false
            }
        }
    }

    async fn request_review(&self) -> ReviewResult<()> {
        self.forward(METHOD_REQUEST_REVIEW, None).await?;
        Ok(())
    }

    async fn open_store_listing(
        &self,
        app_store_id: Option<&str>,
        microsoft_store_id: Option<&str>,
    ) -> ReviewResult<()> {
        match &self.platform {
            platform if platform.is_apple() => {
                let id = self.require(app_store_id, "appStoreId")?;
                self.forward(METHOD_OPEN_STORE_LISTING, Some(json!({ "appStoreId": id })))
                    .await?;
                Ok(())
            }
            TargetPlatform::Android => {
                self.forward(METHOD_OPEN_STORE_LISTING, None).await?;
                Ok(())
            }
            TargetPlatform::Windows => {
                let id = self.require(microsoft_store_id, "microsoftStoreId")?;
                let url = microsoft_store_review_url(id);
                log::debug!("Launching {url}");
                // No registered handler for the scheme is not an error for the caller
                if let Err(e) = self.launcher.launch(&url).await {
                    log::warn!("{e}");
                }
                Ok(())
            }
            other => Err(ReviewError::UnsupportedPlatform(other.name().to_string())),
        }
    }
}
