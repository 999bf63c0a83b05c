use chrono::{DateTime, Utc};
use killswitch_domain::{Device, TagCount, ViewCounts};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceQuery {
    pub view: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

/// A controller station merged with its local metadata.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub mac: String,
    pub hostname: String,
    pub ip: Option<String>,
    pub is_wired: bool,
    pub is_guest: bool,
    pub blocked: bool,
    pub hidden: bool,
    pub name: Option<String>,
    pub device_name: Option<String>,
    pub last_seen: i64,
    pub last_blocked_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
}

impl DeviceResponse {
    pub fn from_device(d: Device) -> Self {
        Self {
            id: d.client.id,
            mac: d.client.mac,
            hostname: d.client.hostname,
            ip: d.client.ip,
            is_wired: d.client.is_wired,
            is_guest: d.client.is_guest,
            blocked: d.blocked,
            hidden: d.hidden,
            name: d.client.name,
            device_name: d.client.device_name,
            last_seen: d.client.last_seen,
            last_blocked_at: d.last_blocked_at,
            tags: d.tags,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviceListResponse {
    pub clients: Vec<DeviceResponse>,
    pub tags: Vec<TagCount>,
    pub counts: ViewCounts,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetBlockedRequest {
    pub blocked: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetHiddenRequest {
    pub hidden: bool,
}
