use killswitch_domain::network_client::UNKNOWN_HOSTNAME;
use killswitch_domain::{canonical_mac, NetworkClient};
use serde_json::Value;
use std::collections::HashMap;

/// Raw `last_seen` values at or above this are milliseconds. Second-based
/// timestamps stay below it until the year 5138.
pub const MILLIS_THRESHOLD: i64 = 100_000_000_000;

pub fn normalize_timestamp(raw: i64) -> i64 {
    if raw >= MILLIS_THRESHOLD {
        raw / 1000
    } else {
        raw
    }
}

/// `last_seen` in seconds, if the record carries a numeric one.
pub fn last_seen_secs(raw: &Value) -> Option<i64> {
    let value = raw.get("last_seen")?;
    let ts = value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))?;
    Some(normalize_timestamp(ts))
}

/// JavaScript-style truthiness, which is how the controller's flags have
/// always been read.
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

pub fn is_blocked(raw: &Value) -> bool {
    truthy(raw.get("blocked"))
}

/// Kept when seen after `cutoff_secs` or blocked. A record without a usable
/// `last_seen` only survives if blocked.
pub fn is_recent_or_blocked(raw: &Value, cutoff_secs: i64) -> bool {
    is_blocked(raw) || last_seen_secs(raw).is_some_and(|ts| ts > cutoff_secs)
}

fn text(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Maps a raw controller record onto a [`NetworkClient`]. Records without a MAC
/// yield `None`.
pub fn normalize_client(raw: &Value, now_secs: i64) -> Option<NetworkClient> {
    let mac = text(raw, "mac")?;
    let hostname = text(raw, "hostname").or_else(|| text(raw, "name"));

    Some(NetworkClient {
        id: text(raw, "_id")
            .or_else(|| text(raw, "id"))
            .unwrap_or_else(|| mac.clone()),
        hostname: hostname
            .clone()
            .unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string()),
        ip: text(raw, "ip").or_else(|| text(raw, "fixed_ip")),
        is_wired: truthy(raw.get("is_wired")),
        is_guest: truthy(raw.get("is_guest")),
        blocked: is_blocked(raw),
        name: text(raw, "name").or(hostname),
        device_name: text(raw, "device_name")
            .or_else(|| text(raw, "oui"))
            .or_else(|| text(raw, "hostname")),
        last_seen: last_seen_secs(raw)
            .filter(|ts| *ts > 0)
            .unwrap_or(now_secs),
        tags: raw
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        mac,
    })
}

/// One record per MAC (compared case-insensitively), in first-seen order. A blocked observation replaces an
/// earlier unblocked one, and the kept record is blocked if any observation was.
pub fn dedupe_by_mac(records: Vec<Value>) -> Vec<Value> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<Value> = Vec::new();

    for record in records {
        let Some(mac) = record.get("mac").and_then(Value::as_str).map(canonical_mac) else {
            unique.push(record);
            continue;
        };

        match positions.get(&mac) {
            None => {
                positions.insert(mac, unique.len());
                unique.push(record);
            }
            Some(&idx) if is_blocked(&record) => unique[idx] = record,
            Some(_) => {}
        }
    }

    unique
}
