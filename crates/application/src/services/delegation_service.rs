use std::sync::Arc;
use tracing::{debug, instrument};
use zonecast_domain::{names, Delegate, DomainError};

use crate::ports::DelegateRepository;

pub struct DelegationService {
    repo: Arc<dyn DelegateRepository>,
}

impl DelegationService {
    pub fn new(repo: Arc<dyn DelegateRepository>) -> Self {
        Self { repo }
    }

    /// Delegate registered for `name`, else for its direct parent.
    ///
    /// Only one level up is consulted; there is no walk to the root.
    #[instrument(skip(self))]
    pub async fn find_for(&self, name: &str) -> Result<Option<Delegate>, DomainError> {
        let name = names::normalize(name);
        if let Some(delegate) = self.repo.find_by_domain(name).await? {
            return Ok(Some(delegate));
        }

        let Some(parent) = names::parent(name) else {
            return Ok(None);
        };

        let inherited = self.repo.find_by_domain(parent).await?;
        if let Some(ref d) = inherited {
            debug!(parent = %parent, base_url = %d.base_url, "Delegation inherited from parent");
        }
        Ok(inherited)
    }
}
