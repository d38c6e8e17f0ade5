use std::sync::Arc;
use tracing::instrument;
use zonecast_domain::{DomainError, ResourceRecord, MAX_ANSWER_RECORDS};

use crate::ports::{ResourceRecordRepository, ZoneRepository};

pub struct GetRecordsUseCase {
    records: Arc<dyn ResourceRecordRepository>,
    zones: Arc<dyn ZoneRepository>,
}

impl GetRecordsUseCase {
    pub fn new(
        records: Arc<dyn ResourceRecordRepository>,
        zones: Arc<dyn ZoneRepository>,
    ) -> Self {
        Self { records, zones }
    }

    #[instrument(skip(self))]
    pub async fn get_by_zone(&self, zone_id: i64) -> Result<Vec<ResourceRecord>, DomainError> {
        self.zones
            .get_by_id(zone_id)
            .await?
            .ok_or_else(|| DomainError::ZoneNotFound(format!("Zone {} not found", zone_id)))?;

        self.records.find_by_zone(zone_id, MAX_ANSWER_RECORDS).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<ResourceRecord>, DomainError> {
        self.records.get_by_id(id).await
    }
}
