use tauri::{AppHandle, Runtime, command};

use crate::{InAppReviewExt, Result, StoreListingRequest};

/// 原生评价弹窗是否可用
///
/// 任何失败都视为不可用
#[command]
pub async fn is_available<R: Runtime>(app: AppHandle<R>) -> bool {
    app.in_app_review().is_available().await
}

/// 请求系统显示评价弹窗
///
/// 是否真正弹出由系统决定（频率限制、配额）
#[command]
pub async fn request_review<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    app.in_app_review().request_review().await
}

/// 打开应用商店页面
///
/// 未传入的商店 ID 使用插件配置中的默认值
#[command]
pub async fn open_store_listing<R: Runtime>(
    app: AppHandle<R>,
    request: StoreListingRequest,
) -> Result<()> {
    app.in_app_review().open_store_listing(request).await
}
