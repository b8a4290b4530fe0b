//! Platforms, destinations, and per-platform deployment targets.

use serde::{Deserialize, Serialize};

/// A platform a target can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS and iPadOS.
    Ios,
    /// macOS.
    MacOs,
    /// watchOS.
    WatchOs,
    /// tvOS.
    TvOs,
    /// visionOS.
    VisionOs,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ios => "iOS",
            Self::MacOs => "macOS",
            Self::WatchOs => "watchOS",
            Self::TvOs => "tvOS",
            Self::VisionOs => "visionOS",
        };
        write!(f, "{name}")
    }
}

/// A platform/device-family axis a target can run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    /// iPhone.
    Iphone,
    /// iPad.
    Ipad,
    /// Native macOS.
    Mac,
    /// iPad app running on macOS in compatibility mode.
    MacWithIpadDesign,
    /// Mac Catalyst.
    MacCatalyst,
    /// Apple Watch.
    AppleWatch,
    /// Apple TV.
    AppleTv,
    /// Native visionOS.
    AppleVision,
    /// iPad app running on visionOS in compatibility mode.
    AppleVisionWithIpadDesign,
}

impl Destination {
    /// The platform this destination builds against.
    ///
    /// Compatibility-mode destinations build against iOS, which is why a
    /// visionOS deployment target needs an explicit carve-out in the
    /// deployment-target rule.
    #[must_use]
    pub fn platform(self) -> Platform {
        match self {
            Self::Iphone
            | Self::Ipad
            | Self::MacWithIpadDesign
            | Self::MacCatalyst
            | Self::AppleVisionWithIpadDesign => Platform::Ios,
            Self::Mac => Platform::MacOs,
            Self::AppleWatch => Platform::WatchOs,
            Self::AppleTv => Platform::TvOs,
            Self::AppleVision => Platform::VisionOs,
        }
    }

    /// Stable raw identifier used in issue text.
    #[must_use]
    pub fn raw_id(self) -> &'static str {
        match self {
            Self::Iphone => "iphone",
            Self::Ipad => "ipad",
            Self::Mac => "mac",
            Self::MacWithIpadDesign => "mac-with-ipad-design",
            Self::MacCatalyst => "mac-catalyst",
            Self::AppleWatch => "apple-watch",
            Self::AppleTv => "apple-tv",
            Self::AppleVision => "apple-vision",
            Self::AppleVisionWithIpadDesign => "apple-vision-with-ipad-design",
        }
    }
}

/// Deployment target versions, at most one per platform.
///
/// Version strings are validated by the deployment-target rule, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentTargets {
    /// Minimum iOS version.
    pub ios: Option<String>,
    /// Minimum macOS version.
    pub macos: Option<String>,
    /// Minimum watchOS version.
    pub watchos: Option<String>,
    /// Minimum tvOS version.
    pub tvos: Option<String>,
    /// Minimum visionOS version.
    pub visionos: Option<String>,
}

impl DeploymentTargets {
    /// Returns the configured (platform, version) pairs in a fixed order.
    #[must_use]
    pub fn configured(&self) -> Vec<(Platform, &str)> {
        [
            (Platform::Ios, &self.ios),
            (Platform::MacOs, &self.macos),
            (Platform::WatchOs, &self.watchos),
            (Platform::TvOs, &self.tvos),
            (Platform::VisionOs, &self.visionos),
        ]
        .into_iter()
        .filter_map(|(platform, version)| version.as_deref().map(|v| (platform, v)))
        .collect()
    }

    /// Deployment targets with only an iOS version set.
    #[must_use]
    pub fn ios(version: impl Into<String>) -> Self {
        Self {
            ios: Some(version.into()),
            ..Self::default()
        }
    }
}
