use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use killswitch_domain::DomainError;
use serde_json::json;
use tracing::error;

pub struct ApiError {
    pub error: DomainError,
    message: Option<String>,
}

impl ApiError {
    /// Replaces the response message for server-side failures. Client errors
    /// (4xx, 503) keep the domain message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        match &self.error {
            DomainError::Validation(_) | DomainError::InvalidAction(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::ControllerNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self {
            error,
            message: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match (status, self.message) {
            (StatusCode::INTERNAL_SERVER_ERROR, Some(message)) => message,
            (StatusCode::INTERNAL_SERVER_ERROR, None) => match &self.error {
                DomainError::DatabaseError(_) => "internal error".to_string(),
                other => other.to_string(),
            },
            _ => self.error.to_string(),
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.error, "Request failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
