use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;
use zonecast_domain::DatabaseConfig;

/// Schema migrations, embedded at build time from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Opens the SQLite pool described by `config` and brings the schema up to date.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let database_url = if config.path.starts_with("sqlite:") {
        config.path.clone()
    } else {
        format!("sqlite://{}", config.path)
    };

    let options = SqliteConnectOptions::from_str(&database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(config.busy_timeout_secs));

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);

    // An in-memory database lives and dies with its single connection.
    let in_memory = database_url.contains(":memory:");
    if in_memory {
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;

    MIGRATOR.run(&pool).await?;

    info!(
        path = %config.path,
        in_memory = in_memory,
        "Database ready"
    );

    Ok(pool)
}
