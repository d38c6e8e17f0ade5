use async_trait::async_trait;
use zonecast_domain::{Delegate, DomainError};

/// Delegation Directory.
#[async_trait]
pub trait DelegateRepository: Send + Sync {
    async fn create(&self, domain: String, base_url: String) -> Result<Delegate, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Delegate>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Delegate>, DomainError>;

    async fn find_by_domain(&self, domain: &str) -> Result<Option<Delegate>, DomainError>;

    async fn update(
        &self,
        id: i64,
        domain: Option<String>,
        base_url: Option<String>,
    ) -> Result<Delegate, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
