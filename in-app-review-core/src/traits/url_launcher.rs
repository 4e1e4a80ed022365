//! Generic URL opening facility

use async_trait::async_trait;

use crate::error::LaunchError;

/// Opens a URL (or custom URI scheme) with whatever the OS has registered for it
#[async_trait]
pub trait UrlLauncher: Send + Sync {
    async fn launch(&self, url: &str) -> Result<(), LaunchError>;
}

/// Launcher that can open nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct UnboundLauncher;

#[async_trait]
impl UrlLauncher for UnboundLauncher {
    async fn launch(&self, url: &str) -> Result<(), LaunchError> {
        Err(LaunchError::new(url, "no URL launcher bound"))
    }
}
