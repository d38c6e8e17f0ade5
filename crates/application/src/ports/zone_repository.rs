use async_trait::async_trait;
use zonecast_domain::{DomainError, Zone};

#[async_trait]
pub trait ZoneRepository: Send + Sync {
    async fn create(&self, domain: String, owner: String, ttl: u32) -> Result<Zone, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Zone>, DomainError>;

    /// Exact, case-preserving match on the zone domain.
    async fn get_by_domain(&self, domain: &str) -> Result<Option<Zone>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Zone>, DomainError>;

    async fn get_by_owner(&self, owner: &str) -> Result<Vec<Zone>, DomainError>;

    /// Removes the zone together with every record it owns.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
