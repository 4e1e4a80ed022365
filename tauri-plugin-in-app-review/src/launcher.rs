use async_trait::async_trait;
use in_app_review_core::{LaunchError, UrlLauncher};

/// Opens URLs with the OS default handler via `tauri-plugin-opener`
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenerLauncher;

#[async_trait]
impl UrlLauncher for OpenerLauncher {
    async fn launch(&self, url: &str) -> Result<(), LaunchError> {
        tauri_plugin_opener::open_url(url, None::<&str>).map_err(|e| LaunchError::new(url, e))
    }
}
