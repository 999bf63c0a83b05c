use killswitch_domain::BlockAction;
use serde_json::{json, Value};

/// Path used to confirm the API key before other calls.
pub const VERIFY_PATH: &str = "/proxy/network/integration/v1/sites";

/// Pulls the station array out of a list response.
pub type Extractor = fn(Value) -> Option<Vec<Value>>;

#[derive(Debug, Clone)]
pub struct ListStrategy {
    pub path: String,
    pub extract: Extractor,
}

/// `all_sta` returns historical and blocked stations in one call.
pub fn primary_list(site: &str) -> ListStrategy {
    ListStrategy {
        path: format!("/proxy/network/api/s/{}/stat/all_sta", site),
        extract: data_array,
    }
}

/// Tried in order when the primary endpoint gives nothing usable.
pub fn fallback_lists(site: &str) -> Vec<ListStrategy> {
    ["stat/sta", "list/user", "stat/alluser"]
        .into_iter()
        .map(|suffix| ListStrategy {
            path: format!("/proxy/network/api/s/{}/{}", site, suffix),
            extract: data_or_bare_array,
        })
        .collect()
}

/// `{"data": [...]}`
pub fn data_array(body: Value) -> Option<Vec<Value>> {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// `{"data": [...]}` or a bare `[...]`.
pub fn data_or_bare_array(body: Value) -> Option<Vec<Value>> {
    match body {
        Value::Array(items) => Some(items),
        other => data_array(other),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandRequest {
    pub path: String,
    pub body: Value,
}

/// Candidate requests for a block or unblock, newest API first. `mac` must
/// already be lower-case.
pub fn command_candidates(site: &str, mac: &str, action: BlockAction) -> Vec<CommandRequest> {
    let body = json!({
        "cmd": action.station_command(),
        "mac": mac,
    });

    vec![
        CommandRequest {
            path: format!(
                "/proxy/network/integration/v1/sites/{}/clients/{}/{}",
                site,
                mac,
                action.to_str()
            ),
            body: body.clone(),
        },
        CommandRequest {
            path: format!("/proxy/network/api/s/{}/cmd/stamgr", site),
            body: body.clone(),
        },
        CommandRequest {
            path: format!("/api/s/{}/cmd/stamgr", site),
            body,
        },
    ]
}
