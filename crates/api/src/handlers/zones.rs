use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::debug;
use zonecast_domain::DomainError;

use crate::{
    dto::{CreateZoneRequest, ZoneQuery, ZoneResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/zones", get(get_zones).post(create_zone))
        .route("/zones/{id}", get(get_zone_by_id).delete(delete_zone))
}

async fn get_zones(
    State(state): State<AppState>,
    Query(params): Query<ZoneQuery>,
) -> Result<Json<Vec<ZoneResponse>>, ApiError> {
    let zones = match params.owner.as_deref() {
        Some(owner) => state.zones.get.get_by_owner(owner).await?,
        None => state.zones.get.get_all().await?,
    };
    debug!(count = zones.len(), "Zones retrieved successfully");
    Ok(Json(zones.into_iter().map(ZoneResponse::from_domain).collect()))
}

async fn get_zone_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ZoneResponse>, ApiError> {
    let zone = state
        .zones
        .get
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError(DomainError::ZoneNotFound(format!("Zone {} not found", id))))?;
    Ok(Json(ZoneResponse::from_domain(zone)))
}

async fn create_zone(
    State(state): State<AppState>,
    Json(req): Json<CreateZoneRequest>,
) -> Result<(StatusCode, Json<ZoneResponse>), ApiError> {
    let zone = state
        .zones
        .create
        .execute(req.domain, req.owner, req.ttl)
        .await?;
    Ok((StatusCode::CREATED, Json(ZoneResponse::from_domain(zone))))
}

async fn delete_zone(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.zones.delete.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
