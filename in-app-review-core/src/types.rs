//! Shared types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Review availability as tracked by the calling application
///
/// Starts as `Loading` and settles once the availability probe completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewAvailability {
    #[default]
    Loading,
    Available,
    Unavailable,
}

impl From<bool> for ReviewAvailability {
    fn from(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::Unavailable
        }
    }
}

/// Operating system the backend dispatches on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetPlatform {
    Android,
    Ios,
    MacOs,
    Windows,
    Linux,
    Web,
    Other(String),
}

impl TargetPlatform {
    /// Platform of the current compile target
    pub fn current() -> Self {
        if cfg!(target_family = "wasm") {
            Self::Web
        } else {
            Self::from_os_name(std::env::consts::OS)
        }
    }

    /// Parse an OS name as reported by `std::env::consts::OS`
    pub fn from_os_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "android" => Self::Android,
            "ios" => Self::Ios,
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "web" | "wasm" => Self::Web,
            other => Self::Other(other.to_string()),
        }
    }

    /// Name used in logs and error messages
    pub fn name(&self) -> &str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Web => "web",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Apple platforms route store listings through an App Store ID
    pub fn is_apple(&self) -> bool {
        matches!(self, Self::Ios | Self::MacOs)
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Store listing request as received from the frontend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreListingRequest {
    /// App Store ID (iOS / macOS)
    #[serde(default)]
    pub app_store_id: Option<String>,
    /// Microsoft Store product ID (Windows)
    #[serde(default)]
    pub microsoft_store_id: Option<String>,
}

impl StoreListingRequest {
    /// Fill missing identifiers from configured defaults
    #[must_use]
    pub fn or_defaults(
        self,
        app_store_id: Option<&str>,
        microsoft_store_id: Option<&str>,
    ) -> Self {
        Self {
            app_store_id: self.app_store_id.or_else(|| app_store_id.map(str::to_string)),
            microsoft_store_id: self
                .microsoft_store_id
                .or_else(|| microsoft_store_id.map(str::to_string)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_from_probe() {
        assert_eq!(ReviewAvailability::default(), ReviewAvailability::Loading);
        assert_eq!(
            ReviewAvailability::from(true),
            ReviewAvailability::Available
        );
        assert_eq!(
            ReviewAvailability::from(false),
            ReviewAvailability::Unavailable
        );
    }

    #[test]
    fn test_from_os_name() {
        assert_eq!(TargetPlatform::from_os_name("android"), TargetPlatform::Android);
        assert_eq!(TargetPlatform::from_os_name("iOS"), TargetPlatform::Ios);
        assert_eq!(TargetPlatform::from_os_name("macos"), TargetPlatform::MacOs);
        assert_eq!(TargetPlatform::from_os_name("windows"), TargetPlatform::Windows);
        assert_eq!(
            TargetPlatform::from_os_name("freebsd"),
            TargetPlatform::Other("freebsd".to_string())
        );
        assert_eq!(TargetPlatform::Other("freebsd".to_string()).to_string(), "freebsd");
    }

    #[test]
    fn test_current_matches_build_target() {
        assert_eq!(TargetPlatform::current().name(), std::env::consts::OS);
    }

    #[test]
    fn test_store_listing_request_defaults() {
        let request: StoreListingRequest =
            serde_json::from_str(r#"{"microsoftStoreId":"9NBLGGH4R315"}"#).unwrap();
        let filled = request.or_defaults(Some("123456789"), Some("ignored"));
        assert_eq!(filled.app_store_id.as_deref(), Some("123456789"));
        assert_eq!(filled.microsoft_store_id.as_deref(), Some("9NBLGGH4R315"));
    }
}
