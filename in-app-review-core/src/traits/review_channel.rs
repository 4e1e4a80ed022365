//! Call boundary to the native handler

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ChannelError;

/// Name the native handlers are registered under
pub const CHANNEL_NAME: &str = "in-app-review";

pub const METHOD_IS_AVAILABLE: &str = "isAvailable";
pub const METHOD_REQUEST_REVIEW: &str = "requestReview";
pub const METHOD_OPEN_STORE_LISTING: &str = "openStoreListing";

/// Review channel Trait
///
/// Sends a named method call with optional JSON arguments to the native
/// handler and resolves with its (possibly null) reply.
///
/// Platform implementations:
/// - Android / iOS: `MobileReviewChannel` (Tauri `PluginHandle`)
/// - Desktop: `DesktopReviewHandler` (in-process)
#[async_trait]
pub trait ReviewChannel: Send + Sync {
    /// Channel name, used in logs
    fn name(&self) -> &str {
        CHANNEL_NAME
    }

    /// Invoke `method` on the native side
    ///
    /// `Ok(None)` means the handler replied with null.
    async fn invoke(
        &self,
        method: &str,
        args: Option<Value>,
    ) -> Result<Option<Value>, ChannelError>;
}

/// Channel with nothing listening on the other end
///
/// Backs the process-wide default backend until a plugin binds a real handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnboundChannel;

#[async_trait]
impl ReviewChannel for UnboundChannel {
    async fn invoke(
        &self,
        method: &str,
        _args: Option<Value>,
    ) -> Result<Option<Value>, ChannelError> {
        Err(ChannelError::transport(format!(
            "no native handler bound to channel `{CHANNEL_NAME}` (method `{method}`)"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unbound_channel_faults() {
        let result = UnboundChannel.invoke(METHOD_REQUEST_REVIEW, None).await;
        assert!(matches!(result, Err(ChannelError::Transport(ref msg)) if msg.contains("requestReview")));
        assert_eq!(UnboundChannel.name(), CHANNEL_NAME);
    }
}
