use crate::Device;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Window in which a station counts as recently seen.
pub const RECENT_WINDOW_DAYS: u32 = 30;

/// Unix seconds before which a station is no longer "recent". A window reaching
/// past the representable range keeps every station.
pub fn recent_cutoff(now: DateTime<Utc>, window_days: u32) -> i64 {
    now.checked_sub_signed(Duration::days(i64::from(window_days)))
        .map_or(i64::MIN, |cutoff| cutoff.timestamp())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceView {
    /// Visible and either blocked or seen within the recent window.
    #[default]
    All,
    Hidden,
    Blocked,
}

impl DeviceView {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(DeviceView::All),
            "hidden" => Some(DeviceView::Hidden),
            "blocked" => Some(DeviceView::Blocked),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeviceFilter {
    pub view: DeviceView,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl DeviceFilter {
    pub fn matches(&self, device: &Device, cutoff_secs: i64) -> bool {
        if let Some(query) = self.search.as_deref().filter(|q| !q.is_empty()) {
            if !device.matches_search(query) {
                return false;
            }
        }

        match self.view {
            DeviceView::Blocked => device.blocked,
            DeviceView::Hidden => device.hidden,
            DeviceView::All => match self.tag.as_deref() {
                Some(tag) => device.has_tag(tag),
                None => in_default_view(device, cutoff_secs),
            },
        }
    }

    pub fn apply(&self, devices: &[Device], cutoff_secs: i64) -> Vec<Device> {
        devices
            .iter()
            .filter(|d| self.matches(d, cutoff_secs))
            .cloned()
            .collect()
    }
}

fn in_default_view(device: &Device, cutoff_secs: i64) -> bool {
    !device.hidden && (device.blocked || device.is_recent(cutoff_secs))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewCounts {
    pub all: usize,
    pub hidden: usize,
    pub blocked: usize,
}

impl ViewCounts {
    pub fn tally(devices: &[Device], cutoff_secs: i64) -> Self {
        devices.iter().fold(Self::default(), |mut acc, d| {
            if in_default_view(d, cutoff_secs) {
                acc.all += 1;
            }
            if d.hidden {
                acc.hidden += 1;
            }
            if d.blocked {
                acc.blocked += 1;
            }
            acc
        })
    }
}

/// Every distinct tag in first-seen order, with the number of devices carrying it.
pub fn tag_counts(devices: &[Device]) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = Vec::new();
    for tag in devices.iter().flat_map(|d| d.tags.iter()) {
        match counts.iter_mut().find(|c| &c.tag == tag) {
            Some(entry) => entry.count += 1,
            None => counts.push(TagCount {
                tag: tag.clone(),
                count: 1,
            }),
        }
    }
    counts
}
