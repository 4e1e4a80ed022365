//! Native handler for desktop targets
//!
//! Desktop has no review prompt API reachable from here, so availability is
//! always `false`. The Mac App Store listing is opened by URL.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ChannelError;
use crate::store_url::{mac_app_store_review_url, normalize_store_id};
use crate::traits::{
    METHOD_IS_AVAILABLE, METHOD_OPEN_STORE_LISTING, METHOD_REQUEST_REVIEW, ReviewChannel,
    UrlLauncher,
};
use crate::types::TargetPlatform;

/// In-process native handler used on desktop
pub struct DesktopReviewHandler {
    launcher: Arc<dyn UrlLauncher>,
    platform: TargetPlatform,
}

impl DesktopReviewHandler {
    pub fn new(launcher: Arc<dyn UrlLauncher>, platform: TargetPlatform) -> Self {
        Self { launcher, platform }
    }

    async fn open_store_listing(
        &self,
        args: Option<&Value>,
    ) -> Result<Option<Value>, ChannelError> {
        if self.platform != TargetPlatform::MacOs {
            return Err(ChannelError::native(
                "unsupported-platform",
                format!("No store listing on {}", self.platform),
            ));
        }

        let requested = args
            .and_then(|args| args.get("appStoreId"))
            .and_then(Value::as_str);
        let id = normalize_store_id(requested).ok_or_else(|| {
            ChannelError::native("missing-app-store-id", "appStoreId argument is required")
        })?;

        let url = mac_app_store_review_url(id);
        self.launcher
            .launch(&url)
            .await
            .map_err(|e| ChannelError::native("launch-failed", e.to_string()))?;
        Ok(None)
    }
}

#[async_trait]
impl ReviewChannel for DesktopReviewHandler {
    async fn invoke(
        &self,
        method: &str,
        args: Option<Value>,
    ) -> Result<Option<Value>, ChannelError> {
        match method {
            METHOD_IS_AVAILABLE => Ok(Some(Value::Bool(false))),
            METHOD_REQUEST_REVIEW => Err(ChannelError::native(
                "unavailable",
                format!("No native review prompt on {}", self.platform),
            )),
            METHOD_OPEN_STORE_LISTING => self.open_store_listing(args.as_ref()).await,
            other => Err(ChannelError::native(
                "not-implemented",
                format!("Unknown method `{other}`"),
            )),
        }
    }
}
