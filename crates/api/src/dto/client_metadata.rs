use chrono::{DateTime, Utc};
use killswitch_domain::{ClientMetadata, ClientMetadataUpdate};
use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the `GET /api/clients` mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientMetadataResponse {
    pub tags: Vec<String>,
    pub hidden: bool,
    pub blocked: bool,
    pub last_blocked_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
}

impl ClientMetadataResponse {
    pub fn from_metadata(m: ClientMetadata) -> Self {
        Self {
            tags: m.tags,
            hidden: m.hidden,
            blocked: m.blocked,
            last_blocked_at: m.last_blocked_at,
            name: m.name,
        }
    }
}

/// A stored record, as returned after a write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecordResponse {
    pub mac: String,
    pub tags: Vec<String>,
    pub hidden: bool,
    pub blocked: bool,
    pub last_blocked_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ClientRecordResponse {
    pub fn from_metadata(m: ClientMetadata) -> Self {
        Self {
            mac: m.mac,
            tags: m.tags,
            hidden: m.hidden,
            blocked: m.blocked,
            last_blocked_at: m.last_blocked_at,
            name: m.name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveClientRequest {
    pub mac: Option<String>,
    #[serde(default)]
    pub data: ClientDataRequest,
}

/// Partial record. Absent fields are left alone; `null` clears
/// `lastBlockedAt` and `name`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDataRequest {
    pub tags: Option<Vec<String>>,
    pub hidden: Option<bool>,
    pub blocked: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub last_blocked_at: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
}

impl ClientDataRequest {
    pub fn into_update(self) -> ClientMetadataUpdate {
        ClientMetadataUpdate {
            tags: self.tags,
            hidden: self.hidden,
            blocked: self.blocked,
            last_blocked_at: self.last_blocked_at,
            name: self.name,
        }
    }
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
