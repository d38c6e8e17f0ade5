use std::sync::Arc;
use tracing::{info, instrument};
use zonecast_domain::DomainError;

use crate::ports::DelegateRepository;

pub struct DeleteDelegateUseCase {
    repo: Arc<dyn DelegateRepository>,
}

impl DeleteDelegateUseCase {
    pub fn new(repo: Arc<dyn DelegateRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::DelegateNotFound(id))?;

        self.repo.delete(id).await?;

        info!(delegate_id = id, "Delegate deleted successfully");

        Ok(())
    }
}
