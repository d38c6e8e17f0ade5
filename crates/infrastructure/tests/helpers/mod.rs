#![allow(dead_code)]
use sqlx::SqlitePool;
use zonecast_domain::DatabaseConfig;
use zonecast_infrastructure::database::create_pool;

/// A migrated, private in-memory database.
pub async fn create_test_db() -> SqlitePool {
    let config = DatabaseConfig {
        path: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    };
    create_pool(&config).await.unwrap()
}
