use std::sync::Arc;
use tracing::{info, instrument};
use zonecast_domain::{names, Delegate, DomainError, Zone};

use crate::ports::DelegateRepository;

pub struct UpdateDelegateUseCase {
    repo: Arc<dyn DelegateRepository>,
}

impl UpdateDelegateUseCase {
    pub fn new(repo: Arc<dyn DelegateRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        id: i64,
        domain: Option<String>,
        base_url: Option<String>,
    ) -> Result<Delegate, DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::DelegateNotFound(id))?;

        let domain = domain.map(|d| names::normalize(d.trim()).to_string());
        if let Some(ref d) = domain {
            Zone::validate_domain(d).map_err(DomainError::InvalidDelegate)?;
            if let Some(existing) = self.repo.find_by_domain(d).await? {
                if existing.id != id {
                    return Err(DomainError::DelegateAlreadyExists(d.clone()));
                }
            }
        }

        let base_url = base_url.map(|u| u.trim().to_string());
        if let Some(ref u) = base_url {
            Delegate::validate_base_url(u).map_err(DomainError::InvalidDelegate)?;
        }

        let updated = self.repo.update(id, domain, base_url).await?;

        info!(
            delegate_id = id,
            domain = %updated.domain,
            base_url = %updated.base_url,
            "Delegate updated successfully"
        );

        Ok(updated)
    }
}
