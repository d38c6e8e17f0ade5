use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tracing::debug;
use zonecast_domain::{DomainError, QueryType, Resolution, ResponseCode};

use crate::{dto::MessageResponse, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/IN/{name}/{qtype}", get(resolve))
        .route("/IN/{name}", get(missing_type))
}

/// HTTP status a caller sees for each response code.
pub fn status_for(rcode: ResponseCode) -> StatusCode {
    match rcode {
        ResponseCode::NoError => StatusCode::OK,
        ResponseCode::NxDomain => StatusCode::NOT_FOUND,
        ResponseCode::Refused => StatusCode::FORBIDDEN,
    }
}

async fn resolve(
    State(state): State<AppState>,
    Path((name, qtype)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let query_type: QueryType = qtype
        .parse()
        .map_err(|e: String| ApiError(DomainError::InvalidQueryType(e)))?;

    match state.resolve_query.execute(&name, &query_type).await? {
        Resolution::Redirect { location } => {
            debug!(name = %name, location = %location, "Redirecting query");
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        Resolution::Answer(message) => {
            let status = status_for(message.rcode());
            Ok((status, Json(MessageResponse::from_domain(&message))).into_response())
        }
    }
}

async fn missing_type(Path(name): Path<String>) -> ApiError {
    ApiError(DomainError::InvalidQueryType(format!(
        "Query type is required for '{}'",
        name
    )))
}
