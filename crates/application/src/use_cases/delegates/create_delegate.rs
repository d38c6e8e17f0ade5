use std::sync::Arc;
use tracing::{info, instrument};
use zonecast_domain::{names, Delegate, DomainError, Zone};

use crate::ports::DelegateRepository;

pub struct CreateDelegateUseCase {
    repo: Arc<dyn DelegateRepository>,
}

impl CreateDelegateUseCase {
    pub fn new(repo: Arc<dyn DelegateRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: String, base_url: String) -> Result<Delegate, DomainError> {
        let domain = names::normalize(domain.trim()).to_string();
        let base_url = base_url.trim().to_string();

        Zone::validate_domain(&domain).map_err(DomainError::InvalidDelegate)?;
        Delegate::validate_base_url(&base_url).map_err(DomainError::InvalidDelegate)?;

        if self.repo.find_by_domain(&domain).await?.is_some() {
            return Err(DomainError::DelegateAlreadyExists(domain));
        }

        let delegate = self.repo.create(domain, base_url).await?;

        info!(
            delegate_id = delegate.id,
            domain = %delegate.domain,
            base_url = %delegate.base_url,
            "Delegate created successfully"
        );

        Ok(delegate)
    }
}
