use serde::{Deserialize, Serialize};

pub use in_app_review_core::{ReviewAvailability, StoreListingRequest};

/// `plugins.in-app-review` section of `tauri.conf.json`
///
/// Store IDs configured here are used when a command does not pass its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub app_store_id: Option<String>,
    #[serde(default)]
    pub microsoft_store_id: Option<String>,
}

/// Reply envelope of the mobile native plugins: `{ "value": ... }` or `{}`
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeReply {
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}
