use crate::{ClientMetadata, NetworkClient};
use chrono::{DateTime, Utc};

/// Merged view of a live station and its local metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub client: NetworkClient,
    pub tags: Vec<String>,
    pub hidden: bool,
    /// Controller-reported OR locally asserted.
    pub blocked: bool,
    pub last_blocked_at: Option<DateTime<Utc>>,
}

impl Device {
    pub fn merge(client: NetworkClient, metadata: Option<&ClientMetadata>) -> Self {
        match metadata {
            Some(meta) => Self {
                blocked: client.blocked || meta.blocked,
                tags: meta.tags.clone(),
                hidden: meta.hidden,
                last_blocked_at: meta.last_blocked_at,
                client: NetworkClient {
                    name: meta.name.clone().or(client.name),
                    ..client
                },
            },
            None => Self {
                blocked: client.blocked,
                tags: Vec::new(),
                hidden: false,
                last_blocked_at: None,
                client,
            },
        }
    }

    pub fn mac(&self) -> &str {
        &self.client.mac
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match over name, hostname, ip and mac.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        let fields = [
            self.client.name.as_deref(),
            Some(self.client.hostname.as_str()),
            self.client.ip.as_deref(),
            Some(self.client.mac.as_str()),
        ];
        fields
            .into_iter()
            .flatten()
            .any(|f| f.to_lowercase().contains(&query))
    }

    pub fn is_recent(&self, cutoff_secs: i64) -> bool {
        self.client.last_seen > cutoff_secs
    }
}
