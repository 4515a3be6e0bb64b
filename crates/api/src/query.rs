//! Query parameter types for API handlers.

use serde::Deserialize;

/// `?platform=` on the template listing. Absent means no filter.
#[derive(Debug, Default, Deserialize)]
pub struct PlatformParams {
    #[serde(default)]
    pub platform: String,
}

/// `?force=` on the seed endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SeedParams {
    #[serde(default)]
    pub force: bool,
}
