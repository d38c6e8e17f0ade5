use std::sync::Arc;
use tracing::{info, instrument};
use zonecast_domain::{names, DomainError, Zone};

use crate::ports::ZoneRepository;

pub struct CreateZoneUseCase {
    repo: Arc<dyn ZoneRepository>,
    default_ttl: u32,
}

impl CreateZoneUseCase {
    pub fn new(repo: Arc<dyn ZoneRepository>, default_ttl: u32) -> Self {
        Self { repo, default_ttl }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: String,
        owner: String,
        ttl: Option<u32>,
    ) -> Result<Zone, DomainError> {
        let domain = names::normalize(domain.trim()).to_string();
        let ttl = ttl.unwrap_or(self.default_ttl);

        Zone::validate_domain(&domain).map_err(DomainError::InvalidZone)?;
        Zone::validate_owner(&owner).map_err(DomainError::InvalidZone)?;
        Zone::validate_ttl(ttl).map_err(DomainError::InvalidZone)?;

        if self.repo.get_by_domain(&domain).await?.is_some() {
            return Err(DomainError::ZoneAlreadyExists(domain));
        }

        let zone = self.repo.create(domain, owner, ttl).await?;

        info!(
            zone_id = zone.id,
            domain = %zone.domain,
            owner = %zone.owner,
            ttl = zone.ttl,
            "Zone created successfully"
        );

        Ok(zone)
    }
}
