use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use killswitch_domain::DomainError;
use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    dto::{ClientMetadataResponse, ClientRecordResponse, SaveClientRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(get_client_data).post(save_client_data))
        .route("/clients/{mac}", get(get_client_record))
}

async fn get_client_data(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, ClientMetadataResponse>>, ApiError> {
    let records = state
        .metadata
        .get_metadata
        .get_all()
        .await
        .map_err(|e| ApiError::from(e).with_message("Failed to fetch client data"))?;

    debug!(count = records.len(), "Client metadata retrieved");
    Ok(Json(
        records
            .into_iter()
            .map(|(mac, record)| (mac, ClientMetadataResponse::from_metadata(record)))
            .collect(),
    ))
}

async fn get_client_record(
    State(state): State<AppState>,
    Path(mac): Path<String>,
) -> Result<Json<ClientRecordResponse>, ApiError> {
    let record = state
        .metadata
        .get_metadata
        .get(&mac)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("No metadata for client {}", mac)))?;

    Ok(Json(ClientRecordResponse::from_metadata(record)))
}

async fn save_client_data(
    State(state): State<AppState>,
    Json(req): Json<SaveClientRequest>,
) -> Result<Json<ClientRecordResponse>, ApiError> {
    let mac = req.mac.unwrap_or_default();
    let saved = state
        .metadata
        .save_metadata
        .execute(&mac, req.data.into_update())
        .await
        .map_err(|e| ApiError::from(e).with_message("Failed to save client data"))?;

    Ok(Json(ClientRecordResponse::from_metadata(saved)))
}
