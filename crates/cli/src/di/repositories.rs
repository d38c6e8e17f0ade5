use sqlx::SqlitePool;
use std::sync::Arc;
use zonecast_application::ports::{DelegateRepository, ResourceRecordRepository, ZoneRepository};
use zonecast_infrastructure::repositories::{
    SqliteDelegateRepository, SqliteResourceRecordRepository, SqliteZoneRepository,
};

pub struct Repositories {
    pub zones: Arc<dyn ZoneRepository>,
    pub records: Arc<dyn ResourceRecordRepository>,
    pub delegates: Arc<dyn DelegateRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            zones: Arc::new(SqliteZoneRepository::new(pool.clone())),
            records: Arc::new(SqliteResourceRecordRepository::new(pool.clone())),
            delegates: Arc::new(SqliteDelegateRepository::new(pool)),
        }
    }
}
