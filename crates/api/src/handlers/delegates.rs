use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use zonecast_domain::DomainError;

use crate::{
    dto::{CreateDelegateRequest, DelegateResponse, UpdateDelegateRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/delegates", get(get_delegates).post(create_delegate))
        .route(
            "/delegates/{id}",
            get(get_delegate_by_id)
                .put(update_delegate)
                .delete(delete_delegate),
        )
}

async fn get_delegates(
    State(state): State<AppState>,
) -> Result<Json<Vec<DelegateResponse>>, ApiError> {
    let delegates = state.delegates.get.get_all().await?;
    Ok(Json(
        delegates
            .into_iter()
            .map(DelegateResponse::from_domain)
            .collect(),
    ))
}

async fn get_delegate_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DelegateResponse>, ApiError> {
    let delegate = state
        .delegates
        .get
        .get_by_id(id)
        .await?
        .ok_or(ApiError(DomainError::DelegateNotFound(id)))?;
    Ok(Json(DelegateResponse::from_domain(delegate)))
}

async fn create_delegate(
    State(state): State<AppState>,
    Json(req): Json<CreateDelegateRequest>,
) -> Result<(StatusCode, Json<DelegateResponse>), ApiError> {
    let delegate = state
        .delegates
        .create
        .execute(req.domain, req.base_url)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DelegateResponse::from_domain(delegate)),
    ))
}

async fn update_delegate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateDelegateRequest>,
) -> Result<Json<DelegateResponse>, ApiError> {
    let delegate = state
        .delegates
        .update
        .execute(id, req.domain, req.base_url)
        .await?;
    Ok(Json(DelegateResponse::from_domain(delegate)))
}

async fn delete_delegate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.delegates.delete.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
