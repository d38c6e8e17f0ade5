use std::sync::Arc;
use zonecast_application::use_cases::{
    CreateDelegateUseCase, CreateRecordUseCase, CreateZoneUseCase, DeleteDelegateUseCase,
    DeleteRecordUseCase, DeleteZoneUseCase, GetDelegatesUseCase, GetRecordsUseCase,
    GetZonesUseCase, ResolveQueryUseCase, UpdateDelegateUseCase, UpdateRecordUseCase,
};

#[derive(Clone)]
pub struct ZoneUseCases {
    pub create: Arc<CreateZoneUseCase>,
    pub get: Arc<GetZonesUseCase>,
    pub delete: Arc<DeleteZoneUseCase>,
}

#[derive(Clone)]
pub struct RecordUseCases {
    pub create: Arc<CreateRecordUseCase>,
    pub get: Arc<GetRecordsUseCase>,
    pub update: Arc<UpdateRecordUseCase>,
    pub delete: Arc<DeleteRecordUseCase>,
}

#[derive(Clone)]
pub struct DelegateUseCases {
    pub create: Arc<CreateDelegateUseCase>,
    pub get: Arc<GetDelegatesUseCase>,
    pub update: Arc<UpdateDelegateUseCase>,
    pub delete: Arc<DeleteDelegateUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub zones: ZoneUseCases,
    pub records: RecordUseCases,
    pub delegates: DelegateUseCases,
    pub resolve_query: Arc<ResolveQueryUseCase>,
}
