use chrono::{DateTime, Utc};

/// Canonical key form for a MAC address: trimmed and lower-cased.
pub fn canonical_mac(mac: &str) -> String {
    mac.trim().to_ascii_lowercase()
}

/// Locally owned augmentation of a station, keyed by MAC.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientMetadata {
    pub mac: String,
    pub tags: Vec<String>,
    pub hidden: bool,
    pub blocked: bool,
    pub last_blocked_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ClientMetadata {
    pub fn new(mac: &str) -> Self {
        Self {
            mac: canonical_mac(mac),
            tags: Vec::new(),
            hidden: false,
            blocked: false,
            last_blocked_at: None,
            name: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Appends `tag` unless already present. Returns whether the list changed.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.has_tag(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Returns whether the tag was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }
}

/// Partial update for a metadata record. `None` leaves a field untouched;
/// for the nullable fields `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientMetadataUpdate {
    pub tags: Option<Vec<String>>,
    pub hidden: Option<bool>,
    pub blocked: Option<bool>,
    pub last_blocked_at: Option<Option<DateTime<Utc>>>,
    pub name: Option<Option<String>>,
}

impl ClientMetadataUpdate {
    pub fn tags(tags: Vec<String>) -> Self {
        Self {
            tags: Some(tags),
            ..Default::default()
        }
    }

    pub fn hidden(hidden: bool) -> Self {
        Self {
            hidden: Some(hidden),
            ..Default::default()
        }
    }

    /// Records a block state change; a block stamps `at`, an unblock clears the stamp.
    pub fn blocked(blocked: bool, at: DateTime<Utc>) -> Self {
        Self {
            blocked: Some(blocked),
            last_blocked_at: Some(blocked.then_some(at)),
            ..Default::default()
        }
    }

    pub fn apply_to(&self, record: &mut ClientMetadata) {
        if let Some(tags) = &self.tags {
            record.tags = tags.clone();
        }
        if let Some(hidden) = self.hidden {
            record.hidden = hidden;
        }
        if let Some(blocked) = self.blocked {
            record.blocked = blocked;
        }
        if let Some(at) = self.last_blocked_at {
            record.last_blocked_at = at;
        }
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
    }
}
