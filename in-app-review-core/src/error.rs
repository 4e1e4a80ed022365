//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Error raised while crossing the channel to a native handler
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ChannelError {
    /// The call never reached the native handler (or its reply was lost)
    #[error("Channel transport failed: {0}")]
    Transport(String),

    /// The native handler ran and rejected the call
    #[error("Native handler error [{code}]: {message}")]
    Native { code: String, message: String },
}

impl ChannelError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport(detail.into())
    }

    pub fn native(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Native {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// External URL launch failed (usually: no handler registered for the scheme)
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Failed to open {url}: {reason}")]
pub struct LaunchError {
    pub url: String,
    pub reason: String,
}

impl LaunchError {
    pub fn new(url: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

/// Review layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ReviewError {
    /// Operation not supported on this OS or OS version
    #[error("Review unavailable: {0}")]
    Unavailable(String),

    /// Caller did not pass an identifier the platform requires
    #[error("Missing argument `{argument}` required on {platform}")]
    MissingArgument { argument: String, platform: String },

    /// No backend path exists for the detected OS
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The channel crossing itself failed
    #[error("Transport error: {0}")]
    Transport(String),

    /// The OS review API rejected or errored
    #[error("Native error [{code}]: {message}")]
    Native { code: String, message: String },

    /// Backend does not override this operation
    #[error("{0} has not been implemented by the active backend")]
    NotImplemented(String),

    /// Registry refused a backend built outside the contract's base
    #[error("Verification failed: {0}")]
    Verification(String),
}

impl ReviewError {
    /// Whether the error comes from the caller or the environment rather than a fault.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Update this when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Unavailable(_)
            | Self::MissingArgument { .. }
            | Self::UnsupportedPlatform(_)
            | Self::NotImplemented(_) => true,
            Self::Transport(_) | Self::Native { .. } | Self::Verification(_) => false,
        }
    }
}

impl From<ChannelError> for ReviewError {
    fn from(err: ChannelError) -> Self {
        match err {
            ChannelError::Transport(detail) => Self::Transport(detail),
            ChannelError::Native { code, message } => Self::Native { code, message },
        }
    }
}

/// Review layer Result type alias
pub type ReviewResult<T> = std::result::Result<T, ReviewError>;
