use std::sync::Arc;
use tracing::instrument;
use zonecast_domain::{Delegate, DomainError};

use crate::ports::DelegateRepository;

pub struct GetDelegatesUseCase {
    repo: Arc<dyn DelegateRepository>,
}

impl GetDelegatesUseCase {
    pub fn new(repo: Arc<dyn DelegateRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Delegate>, DomainError> {
        self.repo.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Delegate>, DomainError> {
        self.repo.get_by_id(id).await
    }
}
