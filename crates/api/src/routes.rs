use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Administrative API, mounted under `/api` by the server.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::zones::routes())
        .merge(handlers::records::routes())
        .merge(handlers::delegates::routes())
        .with_state(state)
}

/// Query interface at the root: `/IN/{name}/{type}`.
pub fn create_query_routes(state: AppState) -> Router {
    handlers::query::routes().with_state(state)
}
