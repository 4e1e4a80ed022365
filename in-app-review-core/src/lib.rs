//! # in-app-review-core
//!
//! Platform abstraction for native "rate this app" flows.
//!
//! Three operations are exposed through [`InAppReviewPlatform`]:
//!
//! | Operation | Android | iOS / macOS | Windows | Web / others |
//! |-----------|---------|-------------|---------|--------------|
//! | `is_available` | native | native | native | `false` |
//! | `request_review` | native | native | native | native (fails) |
//! | `open_store_listing` | native | native, needs `appStoreId` | `ms-windows-store://`, needs `microsoftStoreId` | `UnsupportedPlatform` |
//!
//! The default backend, [`MethodChannelInAppReview`], forwards calls over a
//! [`ReviewChannel`] to a native handler. Host integrations (e.g. the Tauri
//! plugin) bind a real channel and install the backend with [`set_instance`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use in_app_review_core::InAppReview;
//!
//! # async fn example() -> in_app_review_core::ReviewResult<()> {
//! let review = InAppReview::instance();
//! if review.is_available().await {
//!     review.request_review().await?;
//! } else {
//!     review.open_store_listing(Some("1234567890"), Some("9NBLGGH4R315")).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod desktop_handler;
pub mod error;
pub mod method_channel;
pub mod registry;
pub mod store_url;
pub mod traits;
pub mod types;

mod in_app_review;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test_utils;

pub use desktop_handler::DesktopReviewHandler;
pub use error::{ChannelError, LaunchError, ReviewError, ReviewResult};
pub use in_app_review::InAppReview;
pub use method_channel::MethodChannelInAppReview;
pub use registry::{PlatformRegistry, instance, set_instance};
pub use traits::{
    CHANNEL_NAME, InAppReviewPlatform, PlatformInterface, ReviewChannel, UrlLauncher, VerifyToken,
    review_interface,
};
pub use types::{ReviewAvailability, StoreListingRequest, TargetPlatform};
