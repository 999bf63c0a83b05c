use serde::{Deserialize, Serialize};

/// Hostname reported when the controller knows neither a hostname nor an alias.
pub const UNKNOWN_HOSTNAME: &str = "Unknown";

/// A station as reported by the controller, after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkClient {
    #[serde(rename = "_id")]
    pub id: String,
    pub mac: String,
    pub hostname: String,
    pub ip: Option<String>,
    pub is_wired: bool,
    pub is_guest: bool,
    pub blocked: bool,
    pub name: Option<String>,
    pub device_name: Option<String>,
    /// Seconds since the Unix epoch.
    pub last_seen: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NetworkClient {
    pub fn new(mac: impl Into<String>) -> Self {
        let mac = mac.into();
        Self {
            id: mac.clone(),
            mac,
            hostname: UNKNOWN_HOSTNAME.to_string(),
            ip: None,
            is_wired: false,
            is_guest: false,
            blocked: false,
            name: None,
            device_name: None,
            last_seen: 0,
            tags: Vec::new(),
        }
    }
}
