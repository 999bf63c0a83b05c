use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("UniFi API not configured")]
    ControllerNotConfigured,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Failed to fetch clients: {0}")]
    ClientRetrievalFailed(String),

    #[error("Failed to {action} client {mac}: {reason}")]
    ClientOperationFailed {
        action: &'static str,
        mac: String,
        reason: String,
    },

    #[error("{0}")]
    Validation(String),

    #[error("Invalid action '{0}': must be 'block' or 'unblock'")]
    InvalidAction(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}
