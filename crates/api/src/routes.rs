use crate::handlers;
use crate::middleware::require_api_key;
use crate::state::AppState;
use axum::{middleware, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .merge(handlers::health::routes())
        .merge(handlers::clients::routes())
        .merge(handlers::controller::routes())
        .merge(handlers::devices::routes())
        .merge(handlers::tags::routes())
        .layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .with_state(state)
}
