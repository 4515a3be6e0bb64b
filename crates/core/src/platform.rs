//! Target store platforms and the catalog's platform filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Sentinel filter value meaning "every platform".
pub const FILTER_ALL: &str = "all";

/// Platform a template (or an export size) targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Both,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Both => "both",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "both" => Ok(Platform::Both),
            other => Err(CoreError::InvalidArgument(format!(
                "unknown platform '{other}', expected one of: ios, android, both"
            ))),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Platform restriction applied when listing templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformFilter {
    /// No restriction.
    #[default]
    All,
    /// Templates for exactly this platform, plus those targeting `both`.
    Only(Platform),
}

impl PlatformFilter {
    /// Parse a raw query value. Empty string and `all` mean no filtering.
    /// A value naming no platform equals nothing but `both`, so it narrows
    /// the listing to universal templates.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | FILTER_ALL => PlatformFilter::All,
            other => PlatformFilter::Only(other.parse().unwrap_or(Platform::Both)),
        }
    }

    /// Whether a template targeting `platform` passes this filter.
    pub fn matches(self, platform: Platform) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Only(wanted) => platform == wanted || platform == Platform::Both,
        }
    }

    /// The platform value to match besides `both`, if any.
    pub fn platform(self) -> Option<Platform> {
        match self {
            PlatformFilter::All => None,
            PlatformFilter::Only(p) => Some(p),
        }
    }
}
