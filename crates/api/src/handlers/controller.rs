use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use killswitch_domain::{BlockAction, DomainError, NetworkClient};
use tracing::debug;

use crate::{
    dto::{ControlClientRequest, MessageResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/controller", get(get_network_clients).post(control_client))
}

async fn get_network_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<NetworkClient>>, ApiError> {
    let controller = state.controller()?;
    let clients = controller.list_clients.execute().await.map_err(|e| {
        let message = format!("Error fetching clients: {}", e);
        ApiError::from(e).with_message(message)
    })?;

    debug!(count = clients.len(), "Controller clients retrieved");
    Ok(Json(clients))
}

async fn control_client(
    State(state): State<AppState>,
    Json(req): Json<ControlClientRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let controller = state.controller()?;

    let mac = req
        .mac
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| DomainError::Validation("MAC address is required".to_string()))?;

    let raw_action = req.action.unwrap_or_default();
    let action = BlockAction::from_str(&raw_action)
        .ok_or_else(|| DomainError::InvalidAction(raw_action.clone()))?;

    controller.control_client.execute(&mac, action).await?;

    Ok(Json(MessageResponse {
        message: format!("Client {} {}ed successfully", mac, action),
    }))
}
