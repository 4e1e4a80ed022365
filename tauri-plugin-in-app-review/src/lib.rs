//! Tauri In-App Review Plugin
//!
//! Shows the native review prompt (Play In-App Review on Android,
//! `SKStoreReviewController` on iOS) and opens store listings for manual
//! reviews. The platform logic lives in `in-app-review-core`; this plugin binds
//! it to the native handlers and the OS URL opener.

use std::sync::Arc;

use in_app_review_core::{
    InAppReview, MethodChannelInAppReview, ReviewChannel, ReviewError, ReviewResult,
    StoreListingRequest, TargetPlatform,
};
use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};

mod commands;
mod launcher;
mod models;

#[cfg(mobile)]
mod mobile;

pub use launcher::OpenerLauncher;
pub use models::*;

/// Plugin error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(mobile)]
    #[error("Plugin invoke error: {0}")]
    PluginInvoke(#[from] tauri::plugin::mobile::PluginInvokeError),

    #[error(transparent)]
    Review(ReviewError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ReviewError> for Error {
    fn from(err: ReviewError) -> Self {
        if err.is_expected() {
            log::warn!("In-app review: {err}");
        } else {
            log::error!("In-app review: {err}");
        }
        Self::Review(err)
    }
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            #[cfg(mobile)]
            Self::PluginInvoke(e) => ReviewError::Transport(e.to_string()).serialize(serializer),
            Self::Review(e) => e.serialize(serializer),
        }
    }
}

/// Plugin state: configured store IDs in front of the active review backend
pub struct InAppReviewHandle {
    config: Config,
}

impl InAppReviewHandle {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn is_available(&self) -> bool {
        InAppReview::instance().is_available().await
    }

    pub async fn request_review(&self) -> Result<()> {
        InAppReview::instance().request_review().await?;
        Ok(())
    }

    /// Open the store listing; IDs missing from `request` fall back to the plugin config
    pub async fn open_store_listing(&self, request: StoreListingRequest) -> Result<()> {
        let request = request.or_defaults(
            self.config.app_store_id.as_deref(),
            self.config.microsoft_store_id.as_deref(),
        );
        InAppReview::instance()
            .open_store_listing(
                request.app_store_id.as_deref(),
                request.microsoft_store_id.as_deref(),
            )
            .await?;
        Ok(())
    }
}

/// Extends `AppHandle`, `App` and `Window` with the review API
pub trait InAppReviewExt<R: Runtime> {
    fn in_app_review(&self) -> &InAppReviewHandle;
}

impl<R: Runtime, T: Manager<R>> InAppReviewExt<R> for T {
    fn in_app_review(&self) -> &InAppReviewHandle {
        self.state::<InAppReviewHandle>().inner()
    }
}

/// Build the backend for `platform` on top of `channel` and make it the active one
fn install_backend(
    channel: Arc<dyn ReviewChannel>,
    platform: TargetPlatform,
) -> ReviewResult<()> {
    let backend = MethodChannelInAppReview::new(channel, Arc::new(OpenerLauncher), platform);
    log::debug!("Installing review backend for {}", backend.platform());
    in_app_review_core::set_instance(Arc::new(backend))
}

/// Initialize the plugin
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::<R, Option<Config>>::new("in-app-review")
        .invoke_handler(tauri::generate_handler![
            commands::is_available,
            commands::request_review,
            commands::open_store_listing,
        ])
        .setup(|app, api| {
            let platform = TargetPlatform::from_os_name(tauri_plugin_os::platform());
            let config = api.config().clone().unwrap_or_default();

            #[cfg(mobile)]
            let channel: Arc<dyn ReviewChannel> =
                Arc::new(mobile::MobileReviewChannel::new(app, &api)?);

            #[cfg(desktop)]
            let channel: Arc<dyn ReviewChannel> = Arc::new(
                in_app_review_core::DesktopReviewHandler::new(
                    Arc::new(OpenerLauncher),
                    platform.clone(),
                ),
            );

            install_backend(channel, platform).map_err(Error::from)?;
            app.manage(InAppReviewHandle::new(config));
            Ok(())
        })
        .build()
}
