use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;
use zonecast_domain::DomainError;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::ZoneNotFound(_)
            | DomainError::RecordNotFound(_)
            | DomainError::DelegateNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),

            DomainError::InvalidZone(_)
            | DomainError::InvalidRecord(_)
            | DomainError::InvalidDelegate(_)
            | DomainError::InvalidQueryType(_)
            | DomainError::InvalidDomainName(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::ZoneAlreadyExists(_) | DomainError::DelegateAlreadyExists(_) => {
                (StatusCode::CONFLICT, self.0.to_string())
            }

            DomainError::DatabaseError(e) => {
                error!(error = %e, "Request failed on the store");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
