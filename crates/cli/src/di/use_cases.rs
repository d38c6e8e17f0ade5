use super::Repositories;
use std::sync::Arc;
use zonecast_api::{AppState, DelegateUseCases, RecordUseCases, ZoneUseCases};
use zonecast_application::services::{DelegationService, QueryResolver, ResponseAssembler};
use zonecast_application::use_cases::{
    CreateDelegateUseCase, CreateRecordUseCase, CreateZoneUseCase, DeleteDelegateUseCase,
    DeleteRecordUseCase, DeleteZoneUseCase, GetDelegatesUseCase, GetRecordsUseCase,
    GetZonesUseCase, ResolveQueryUseCase, UpdateDelegateUseCase, UpdateRecordUseCase,
};
use zonecast_domain::Config;

pub struct UseCases {
    pub zones: ZoneUseCases,
    pub records: RecordUseCases,
    pub delegates: DelegateUseCases,
    pub resolve_query: Arc<ResolveQueryUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Self {
        let soa = config.zones.soa_settings();

        let resolver = Arc::new(QueryResolver::new(
            repos.zones.clone(),
            repos.records.clone(),
            soa.clone(),
        ));
        let assembler = Arc::new(ResponseAssembler::new(repos.zones.clone(), soa));
        let delegation = Arc::new(DelegationService::new(repos.delegates.clone()));

        Self {
            zones: ZoneUseCases {
                create: Arc::new(CreateZoneUseCase::new(
                    repos.zones.clone(),
                    config.zones.default_ttl,
                )),
                get: Arc::new(GetZonesUseCase::new(repos.zones.clone())),
                delete: Arc::new(DeleteZoneUseCase::new(repos.zones.clone())),
            },
            records: RecordUseCases {
                create: Arc::new(CreateRecordUseCase::new(
                    repos.records.clone(),
                    repos.zones.clone(),
                )),
                get: Arc::new(GetRecordsUseCase::new(
                    repos.records.clone(),
                    repos.zones.clone(),
                )),
                update: Arc::new(UpdateRecordUseCase::new(
                    repos.records.clone(),
                    repos.zones.clone(),
                )),
                delete: Arc::new(DeleteRecordUseCase::new(repos.records.clone())),
            },
            delegates: DelegateUseCases {
                create: Arc::new(CreateDelegateUseCase::new(repos.delegates.clone())),
                get: Arc::new(GetDelegatesUseCase::new(repos.delegates.clone())),
                update: Arc::new(UpdateDelegateUseCase::new(repos.delegates.clone())),
                delete: Arc::new(DeleteDelegateUseCase::new(repos.delegates.clone())),
            },
            resolve_query: Arc::new(ResolveQueryUseCase::new(delegation, resolver, assembler)),
        }
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            zones: self.zones,
            records: self.records,
            delegates: self.delegates,
            resolve_query: self.resolve_query,
        }
    }
}
