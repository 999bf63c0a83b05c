use serde::{Deserialize, Serialize};

use crate::device_filter::RECENT_WINDOW_DAYS;

pub const DEFAULT_SITE: &str = "default";

/// Connection settings for the UniFi controller.
///
/// The controller is optional: without a URL and an API key the dashboard
/// still serves local metadata, and controller routes answer 503.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_site")]
    pub site: String,

    /// Seconds after which the API key is verified again before the next call.
    #[serde(default = "default_session_timeout_secs")]
    pub session_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Stations last seen longer ago than this are dropped unless blocked.
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            site: default_site(),
            session_timeout_secs: default_session_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            recent_window_days: default_recent_window_days(),
        }
    }
}

impl ControllerConfig {
    pub fn is_configured(&self) -> bool {
        non_blank(&self.url) && non_blank(&self.api_key)
    }

    /// Controller base URL without trailing slashes.
    pub fn base_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
    }
}

fn non_blank(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn default_site() -> String {
    DEFAULT_SITE.to_string()
}

fn default_session_timeout_secs() -> u64 {
    3600
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_recent_window_days() -> u32 {
    RECENT_WINDOW_DAYS
}
