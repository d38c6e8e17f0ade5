use std::sync::Arc;
use tracing::{info, instrument};
use zonecast_domain::{DomainError, ResourceRecord};

use super::create_record::qualify_in_zone;
use crate::ports::{ResourceRecordRepository, ZoneRepository};

pub struct UpdateRecordUseCase {
    records: Arc<dyn ResourceRecordRepository>,
    zones: Arc<dyn ZoneRepository>,
}

impl UpdateRecordUseCase {
    pub fn new(
        records: Arc<dyn ResourceRecordRepository>,
        zones: Arc<dyn ZoneRepository>,
    ) -> Self {
        Self { records, zones }
    }

    #[instrument(skip(self, data))]
    pub async fn execute(
        &self,
        id: i64,
        name: Option<String>,
        record_type: Option<String>,
        ttl: Option<u32>,
        data: Option<String>,
    ) -> Result<ResourceRecord, DomainError> {
        let current = self
            .records
            .get_by_id(id)
            .await?
            .ok_or(DomainError::RecordNotFound(id))?;

        let name = match name {
            Some(n) => {
                let zone = self.zones.get_by_id(current.zone_id).await?.ok_or_else(|| {
                    DomainError::ZoneNotFound(format!("Zone {} not found", current.zone_id))
                })?;
                Some(qualify_in_zone(&n, &zone)?)
            }
            None => None,
        };

        let record_type = record_type.map(|t| t.trim().to_ascii_uppercase());
        if let Some(ref t) = record_type {
            ResourceRecord::validate_type(t).map_err(DomainError::InvalidRecord)?;
        }

        let data = data.map(|d| d.trim().to_string());
        if let Some(ref d) = data {
            ResourceRecord::validate_data(d).map_err(DomainError::InvalidRecord)?;
        }

        ResourceRecord::validate_ttl(ttl).map_err(DomainError::InvalidRecord)?;

        let updated = self
            .records
            .update(id, name, record_type, ttl, data)
            .await?;

        info!(
            record_id = id,
            name = %updated.name,
            record_type = %updated.record_type,
            "Resource record updated successfully"
        );

        Ok(updated)
    }
}
