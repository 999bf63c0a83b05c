use killswitch_application::use_cases::BulkBlockReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct AddTagRequest {
    pub tag: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkActionResponse {
    pub tag: String,
    pub action: String,
    pub processed: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BulkActionResponse {
    pub fn from_report(report: BulkBlockReport) -> Self {
        let (failed_mac, error) = match report.failure {
            Some((mac, e)) => (Some(mac), Some(e.to_string())),
            None => (None, None),
        };
        Self {
            tag: report.tag,
            action: report.action.to_str().to_string(),
            processed: report.processed,
            failed_mac,
            error,
        }
    }
}
