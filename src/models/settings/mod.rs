//! Portal client settings.
//!
//! Loaded from a TOML file in the platform config directory; every field
//! has a default so a missing file or a partial file still works.

use serde::{Deserialize, Serialize};

/// Connection settings for the portal backend API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Base URL of the portal REST API, without a trailing slash.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Retries after the first failed attempt.
    pub max_retries: usize,
    /// Delay between retry attempts.
    pub retry_delay_ms: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://portal.example.org/api".to_string(),
            request_timeout_secs: 20,
            max_retries: 2,
            retry_delay_ms: 400,
        }
    }
}

impl PortalConfig {
    /// Normalized base URL: trailing slashes stripped so paths join cleanly.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
