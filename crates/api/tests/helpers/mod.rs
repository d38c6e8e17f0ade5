#![allow(dead_code)]
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use zonecast_api::{
    create_api_routes, create_query_routes, AppState, DelegateUseCases, RecordUseCases,
    ZoneUseCases,
};
use zonecast_application::ports::{DelegateRepository, ResourceRecordRepository, ZoneRepository};
use zonecast_application::services::{DelegationService, QueryResolver, ResponseAssembler};
use zonecast_application::use_cases::*;
use zonecast_domain::{DatabaseConfig, SoaSettings};
use zonecast_infrastructure::database::create_pool;
use zonecast_infrastructure::repositories::{
    SqliteDelegateRepository, SqliteResourceRecordRepository, SqliteZoneRepository,
};

/// Admin routes under `/api` plus the query routes at the root, over a fresh
/// in-memory store.
pub async fn create_test_app() -> Router {
    let config = DatabaseConfig {
        path: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    };
    let pool = create_pool(&config).await.unwrap();

    let zones: Arc<dyn ZoneRepository> = Arc::new(SqliteZoneRepository::new(pool.clone()));
    let records: Arc<dyn ResourceRecordRepository> =
        Arc::new(SqliteResourceRecordRepository::new(pool.clone()));
    let delegates: Arc<dyn DelegateRepository> =
        Arc::new(SqliteDelegateRepository::new(pool));
    let soa = SoaSettings::default();

    let state = AppState {
        zones: ZoneUseCases {
            create: Arc::new(CreateZoneUseCase::new(zones.clone(), 3600)),
            get: Arc::new(GetZonesUseCase::new(zones.clone())),
            delete: Arc::new(DeleteZoneUseCase::new(zones.clone())),
        },
        records: RecordUseCases {
            create: Arc::new(CreateRecordUseCase::new(records.clone(), zones.clone())),
            get: Arc::new(GetRecordsUseCase::new(records.clone(), zones.clone())),
            update: Arc::new(UpdateRecordUseCase::new(records.clone(), zones.clone())),
            delete: Arc::new(DeleteRecordUseCase::new(records.clone())),
        },
        delegates: DelegateUseCases {
            create: Arc::new(CreateDelegateUseCase::new(delegates.clone())),
            get: Arc::new(GetDelegatesUseCase::new(delegates.clone())),
            update: Arc::new(UpdateDelegateUseCase::new(delegates.clone())),
            delete: Arc::new(DeleteDelegateUseCase::new(delegates.clone())),
        },
        resolve_query: Arc::new(ResolveQueryUseCase::new(
            Arc::new(DelegationService::new(delegates)),
            Arc::new(QueryResolver::new(zones.clone(), records, soa.clone())),
            Arc::new(ResponseAssembler::new(zones, soa)),
        )),
    };

    Router::new()
        .nest("/api", create_api_routes(state.clone()))
        .merge(create_query_routes(state))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().uri(uri).method(method);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
