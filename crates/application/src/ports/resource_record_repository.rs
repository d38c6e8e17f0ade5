use async_trait::async_trait;
use zonecast_domain::{DomainError, ResourceRecord};

/// Record Store.
///
/// Every mutation must advance the parent zone's `updated_at` in the same
/// atomic write, strictly past its previous value. Enumerations are ordered
/// by id and capped at `limit` rows.
#[async_trait]
pub trait ResourceRecordRepository: Send + Sync {
    async fn create(
        &self,
        zone_id: i64,
        name: String,
        record_type: String,
        ttl: Option<u32>,
        data: String,
    ) -> Result<ResourceRecord, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<ResourceRecord>, DomainError>;

    async fn update(
        &self,
        id: i64,
        name: Option<String>,
        record_type: Option<String>,
        ttl: Option<u32>,
        data: Option<String>,
    ) -> Result<ResourceRecord, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;

    async fn find_by_name(&self, name: &str, limit: u32)
        -> Result<Vec<ResourceRecord>, DomainError>;

    async fn find_by_name_and_type(
        &self,
        name: &str,
        record_type: &str,
        limit: u32,
    ) -> Result<Vec<ResourceRecord>, DomainError>;

    async fn find_by_zone(&self, zone_id: i64, limit: u32)
        -> Result<Vec<ResourceRecord>, DomainError>;
}
