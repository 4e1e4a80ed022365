use async_trait::async_trait;
use in_app_review_core::{CHANNEL_NAME, ChannelError, ReviewChannel};
use serde_json::Value;
use tauri::{
    AppHandle, Runtime,
    plugin::{PluginApi, PluginHandle, mobile::PluginInvokeError},
};

use crate::models::{Config, NativeReply};

#[cfg(target_os = "android")]
const PLUGIN_IDENTIFIER: &str = "app.tauri.inappreview";

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_in_app_review);

/// Channel to the Kotlin / Swift review plugin
pub struct MobileReviewChannel<R: Runtime>(PluginHandle<R>);

impl<R: Runtime> MobileReviewChannel<R> {
    pub fn new(_app: &AppHandle<R>, api: &PluginApi<R, Option<Config>>) -> crate::Result<Self> {
        #[cfg(target_os = "android")]
        let handle = api.register_android_plugin(PLUGIN_IDENTIFIER, "InAppReviewPlugin")?;

        #[cfg(target_os = "ios")]
        let handle = api.register_ios_plugin(init_plugin_in_app_review)?;

        Ok(Self(handle))
    }
}

fn map_invoke_error(err: PluginInvokeError) -> ChannelError {
    match err {
        PluginInvokeError::InvokeRejected(rejected) => ChannelError::native(
            rejected.code.unwrap_or_else(|| "ERROR".to_string()),
            rejected.message.unwrap_or_default(),
        ),
        other => ChannelError::transport(other.to_string()),
    }
}

#[async_trait]
impl<R: Runtime> ReviewChannel for MobileReviewChannel<R> {
    async fn invoke(
        &self,
        method: &str,
        args: Option<Value>,
    ) -> Result<Option<Value>, ChannelError> {
        let handle = self.0.clone();
        let method = method.to_string();
        let payload = args.unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        // `run_mobile_plugin` blocks until the native side resolves
        let reply = tauri::async_runtime::spawn_blocking(move || {
            handle.run_mobile_plugin::<NativeReply>(method, payload)
        })
        .await
        .map_err(|e| ChannelError::transport(format!("{CHANNEL_NAME}: {e}")))?
        .map_err(map_invoke_error)?;

        Ok(reply.value)
    }
}
