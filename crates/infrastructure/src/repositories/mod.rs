pub mod delegate_repository;
pub mod resource_record_repository;
pub mod zone_repository;

pub use delegate_repository::SqliteDelegateRepository;
pub use resource_record_repository::SqliteResourceRecordRepository;
pub use zone_repository::SqliteZoneRepository;

use chrono::{DateTime, Utc};

/// Columns hold Unix epoch seconds.
pub(crate) fn from_epoch(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}
