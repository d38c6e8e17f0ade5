use std::sync::Arc;
use tracing::instrument;
use zonecast_domain::{DomainError, Zone};

use crate::ports::ZoneRepository;

pub struct GetZonesUseCase {
    repo: Arc<dyn ZoneRepository>,
}

impl GetZonesUseCase {
    pub fn new(repo: Arc<dyn ZoneRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Zone>, DomainError> {
        self.repo.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_owner(&self, owner: &str) -> Result<Vec<Zone>, DomainError> {
        self.repo.get_by_owner(owner).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Zone>, DomainError> {
        self.repo.get_by_id(id).await
    }
}
