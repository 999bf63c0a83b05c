use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use killswitch_domain::{DeviceFilter, DeviceView, DomainError};
use tracing::debug;

use crate::{
    dto::{
        AddTagRequest, ClientRecordResponse, DeviceListResponse, DeviceQuery, DeviceResponse,
        SetBlockedRequest, SetHiddenRequest,
    },
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/devices", get(list_devices))
        .route("/devices/{mac}/blocked", put(set_blocked))
        .route("/devices/{mac}/hidden", put(set_hidden))
        .route("/devices/{mac}/tags", post(add_tag))
        .route("/devices/{mac}/tags/{tag}", delete(remove_tag))
}

fn build_filter(params: DeviceQuery) -> Result<DeviceFilter, DomainError> {
    let view = match params.view.as_deref().filter(|v| !v.is_empty()) {
        None => DeviceView::All,
        Some(v) => DeviceView::from_str(v).ok_or_else(|| {
            DomainError::Validation(format!(
                "Invalid view '{}': must be 'all', 'hidden' or 'blocked'",
                v
            ))
        })?,
    };

    Ok(DeviceFilter {
        view,
        tag: params.tag.filter(|t| !t.is_empty()),
        search: params.search.filter(|s| !s.trim().is_empty()),
    })
}

async fn list_devices(
    State(state): State<AppState>,
    Query(params): Query<DeviceQuery>,
) -> Result<Json<DeviceListResponse>, ApiError> {
    let controller = state.controller()?;
    let filter = build_filter(params)?;

    let listing = controller.list_devices.execute(&filter).await?;
    debug!(
        returned = listing.devices.len(),
        view = ?filter.view,
        "Devices listed"
    );

    Ok(Json(DeviceListResponse {
        clients: listing
            .devices
            .into_iter()
            .map(DeviceResponse::from_device)
            .collect(),
        tags: listing.tags,
        counts: listing.counts,
    }))
}

async fn set_blocked(
    State(state): State<AppState>,
    Path(mac): Path<String>,
    Json(req): Json<SetBlockedRequest>,
) -> Result<Json<ClientRecordResponse>, ApiError> {
    let controller = state.controller()?;
    let saved = controller.set_blocked.execute(&mac, req.blocked).await?;
    Ok(Json(ClientRecordResponse::from_metadata(saved)))
}

async fn set_hidden(
    State(state): State<AppState>,
    Path(mac): Path<String>,
    Json(req): Json<SetHiddenRequest>,
) -> Result<Json<ClientRecordResponse>, ApiError> {
    let saved = state.metadata.set_hidden.execute(&mac, req.hidden).await?;
    Ok(Json(ClientRecordResponse::from_metadata(saved)))
}

async fn add_tag(
    State(state): State<AppState>,
    Path(mac): Path<String>,
    Json(req): Json<AddTagRequest>,
) -> Result<Json<ClientRecordResponse>, ApiError> {
    let saved = state.metadata.update_tags.add_tag(&mac, &req.tag).await?;
    Ok(Json(ClientRecordResponse::from_metadata(saved)))
}

async fn remove_tag(
    State(state): State<AppState>,
    Path((mac, tag)): Path<(String, String)>,
) -> Result<Json<ClientRecordResponse>, ApiError> {
    let saved = state.metadata.update_tags.remove_tag(&mac, &tag).await?;
    Ok(Json(ClientRecordResponse::from_metadata(saved)))
}
