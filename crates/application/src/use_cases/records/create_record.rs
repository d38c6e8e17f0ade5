use std::sync::Arc;
use tracing::{info, instrument};
use zonecast_domain::{names, DomainError, ResourceRecord, Zone};

use crate::ports::{ResourceRecordRepository, ZoneRepository};

pub struct CreateRecordUseCase {
    records: Arc<dyn ResourceRecordRepository>,
    zones: Arc<dyn ZoneRepository>,
}

impl CreateRecordUseCase {
    pub fn new(
        records: Arc<dyn ResourceRecordRepository>,
        zones: Arc<dyn ZoneRepository>,
    ) -> Self {
        Self { records, zones }
    }

    /// `name` may be relative to the zone, `@` for the apex, or absolute.
    #[instrument(skip(self, data))]
    pub async fn execute(
        &self,
        zone_id: i64,
        name: String,
        record_type: String,
        ttl: Option<u32>,
        data: String,
    ) -> Result<ResourceRecord, DomainError> {
        let zone = self
            .zones
            .get_by_id(zone_id)
            .await?
            .ok_or_else(|| DomainError::ZoneNotFound(format!("Zone {} not found", zone_id)))?;

        let name = qualify_in_zone(&name, &zone)?;
        let record_type = record_type.trim().to_ascii_uppercase();
        ResourceRecord::validate_type(&record_type).map_err(DomainError::InvalidRecord)?;
        ResourceRecord::validate_data(&data).map_err(DomainError::InvalidRecord)?;
        ResourceRecord::validate_ttl(ttl).map_err(DomainError::InvalidRecord)?;

        let record = self
            .records
            .create(zone.id, name, record_type, ttl, data.trim().to_string())
            .await?;

        info!(
            record_id = record.id,
            zone = %zone.domain,
            name = %record.name,
            record_type = %record.record_type,
            "Resource record created successfully"
        );

        Ok(record)
    }
}

/// Builds the stored name and checks it stays inside `zone`.
pub(crate) fn qualify_in_zone(name: &str, zone: &Zone) -> Result<String, DomainError> {
    let qualified = names::qualify(name, &zone.domain);
    ResourceRecord::validate_name(&qualified).map_err(DomainError::InvalidRecord)?;

    if !names::is_within(&qualified, &zone.domain) {
        return Err(DomainError::InvalidRecord(format!(
            "Record name '{}' is outside zone '{}'",
            qualified, zone.domain
        )));
    }
    Ok(qualified)
}
