use std::sync::Arc;
use tracing::{info, instrument};
use zonecast_domain::DomainError;

use crate::ports::ZoneRepository;

pub struct DeleteZoneUseCase {
    repo: Arc<dyn ZoneRepository>,
}

impl DeleteZoneUseCase {
    pub fn new(repo: Arc<dyn ZoneRepository>) -> Self {
        Self { repo }
    }

    /// Deletes the zone and, by cascade, all of its records.
    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        let zone = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::ZoneNotFound(format!("Zone {} not found", id)))?;

        self.repo.delete(id).await?;

        info!(zone_id = id, domain = %zone.domain, "Zone deleted successfully");

        Ok(())
    }
}
