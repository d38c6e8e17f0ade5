use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::debug;
use zonecast_domain::DomainError;

use crate::{
    dto::{CreateRecordRequest, RecordResponse, UpdateRecordRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/zones/{id}/records",
            get(get_zone_records).post(create_record),
        )
        .route(
            "/records/{id}",
            get(get_record_by_id).put(update_record).delete(delete_record),
        )
}

async fn get_zone_records(
    State(state): State<AppState>,
    Path(zone_id): Path<i64>,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    let records = state.records.get.get_by_zone(zone_id).await?;
    debug!(zone_id, count = records.len(), "Zone records retrieved successfully");
    Ok(Json(
        records.into_iter().map(RecordResponse::from_domain).collect(),
    ))
}

async fn get_record_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = state
        .records
        .get
        .get_by_id(id)
        .await?
        .ok_or(ApiError(DomainError::RecordNotFound(id)))?;
    Ok(Json(RecordResponse::from_domain(record)))
}

async fn create_record(
    State(state): State<AppState>,
    Path(zone_id): Path<i64>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let record = state
        .records
        .create
        .execute(zone_id, req.name, req.record_type, req.ttl, req.data)
        .await?;
    Ok((StatusCode::CREATED, Json(RecordResponse::from_domain(record))))
}

async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRecordRequest>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = state
        .records
        .update
        .execute(id, req.name, req.record_type, req.ttl, req.data)
        .await?;
    Ok(Json(RecordResponse::from_domain(record)))
}

async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.records.delete.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
