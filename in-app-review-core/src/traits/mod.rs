//! Abstractions the review backends are built on

mod review_channel;
mod review_platform;
mod url_launcher;

pub use review_channel::{
    CHANNEL_NAME, METHOD_IS_AVAILABLE, METHOD_OPEN_STORE_LISTING, METHOD_REQUEST_REVIEW,
    ReviewChannel, UnboundChannel,
};
pub use review_platform::{InAppReviewPlatform, PlatformInterface, VerifyToken, review_interface};
pub use url_launcher::{UnboundLauncher, UrlLauncher};

pub(crate) use review_platform::verify_review_backend;
