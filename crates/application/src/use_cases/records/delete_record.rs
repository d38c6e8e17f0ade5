use std::sync::Arc;
use tracing::{info, instrument};
use zonecast_domain::DomainError;

use crate::ports::ResourceRecordRepository;

pub struct DeleteRecordUseCase {
    records: Arc<dyn ResourceRecordRepository>,
}

impl DeleteRecordUseCase {
    pub fn new(records: Arc<dyn ResourceRecordRepository>) -> Self {
        Self { records }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        let record = self
            .records
            .get_by_id(id)
            .await?
            .ok_or(DomainError::RecordNotFound(id))?;

        self.records.delete(id).await?;

        info!(
            record_id = id,
            zone_id = record.zone_id,
            name = %record.name,
            "Resource record deleted successfully"
        );

        Ok(())
    }
}
