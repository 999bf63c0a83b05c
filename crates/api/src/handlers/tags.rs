use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use killswitch_domain::{BlockAction, DomainError};

use crate::{dto::BulkActionResponse, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/tags/{tag}/{action}", post(bulk_action))
}

/// Blocks or unblocks every client carrying the tag. A partial run answers
/// 500 with the MACs that were already changed.
async fn bulk_action(
    State(state): State<AppState>,
    Path((tag, action)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let controller = state.controller()?;
    let action =
        BlockAction::from_str(&action).ok_or_else(|| DomainError::InvalidAction(action.clone()))?;

    let report = controller.block_by_tag.execute(&tag, action).await?;
    let status = if report.is_complete() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    Ok((status, Json(BulkActionResponse::from_report(report))).into_response())
}
