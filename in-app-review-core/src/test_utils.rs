//! Test helpers
//!
//! Mock channel / launcher and a factory for backends wired to them.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::{ChannelError, LaunchError};
use crate::method_channel::MethodChannelInAppReview;
use crate::traits::{ReviewChannel, UrlLauncher};
use crate::types::TargetPlatform;

type Reply = Result<Option<Value>, ChannelError>;

// ===== MockChannel =====

/// Records every call; replies with the scripted result per method, `Ok(None)` otherwise
pub struct MockChannel {
    replies: RwLock<HashMap<String, Reply>>,
    calls: RwLock<Vec<(String, Option<Value>)>>,
}

impl MockChannel {
    pub fn new() -> Self {
        Self {
            replies: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn with_response(self, method: &str, reply: Reply) -> Self {
        self.replies
            .try_write()
            .unwrap()
            .insert(method.to_string(), reply);
        self
    }

    pub async fn calls(&self) -> Vec<(String, Option<Value>)> {
        self.calls.read().await.clone()
    }

    pub async fn methods(&self) -> Vec<String> {
        self.calls
            .read()
            .await
            .iter()
            .map(|(method, _)| method.clone())
            .collect()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl ReviewChannel for MockChannel {
    async fn invoke(&self, method: &str, args: Option<Value>) -> Reply {
        self.calls.write().await.push((method.to_string(), args));
        self.replies
            .read()
            .await
            .get(method)
            .cloned()
            .unwrap_or(Ok(None))
    }
}

// ===== MockLauncher =====

pub struct MockLauncher {
    launched: RwLock<Vec<String>>,
    fail: bool,
}

impl MockLauncher {
    pub fn new() -> Self {
        Self {
            launched: RwLock::new(Vec::new()),
            fail: false,
        }
    }

    /// Launcher with no handler for any scheme
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub async fn launched(&self) -> Vec<String> {
        self.launched.read().await.clone()
    }
}

#[async_trait]
impl UrlLauncher for MockLauncher {
    async fn launch(&self, url: &str) -> Result<(), LaunchError> {
        self.launched.write().await.push(url.to_string());
        if self.fail {
            Err(LaunchError::new(url, "no application registered"))
        } else {
            Ok(())
        }
    }
}

// ===== Factory =====

pub fn backend_for(
    platform: TargetPlatform,
    channel: &Arc<MockChannel>,
    launcher: &Arc<MockLauncher>,
) -> MethodChannelInAppReview {
    MethodChannelInAppReview::new(channel.clone(), launcher.clone(), platform)
}
