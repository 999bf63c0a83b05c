use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ControlClientRequest {
    pub action: Option<String>,
    pub mac: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
