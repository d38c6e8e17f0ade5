use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::sync::Arc;
use tracing::{debug, error, instrument};
use zonecast_application::ports::ResourceRecordRepository;
use zonecast_domain::{DomainError, ResourceRecord};

use super::from_epoch;

type RecordRow = (i64, i64, String, String, Option<i64>, String, i64, i64);

/// Record Store backed by SQLite.
///
/// Each mutation and the bump of the owning zone's `updated_at` commit in a
/// single transaction, so a reader never sees a record change without the
/// matching serial change.
pub struct SqliteResourceRecordRepository {
    pool: SqlitePool,
}

impl SqliteResourceRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> ResourceRecord {
        let (id, zone_id, name, record_type, ttl, data, created_at, updated_at) = row;
        ResourceRecord {
            id,
            zone_id,
            name: Arc::from(name.as_str()),
            record_type: Arc::from(record_type.as_str()),
            ttl: ttl.map(|t| t.clamp(1, u32::MAX as i64) as u32),
            data: Arc::from(data.as_str()),
            created_at: from_epoch(created_at),
            updated_at: from_epoch(updated_at),
        }
    }

    async fn begin(&self) -> Result<Transaction<'static, Sqlite>, DomainError> {
        self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin record transaction");
            DomainError::DatabaseError(e.to_string())
        })
    }

    async fn commit(tx: Transaction<'static, Sqlite>) -> Result<(), DomainError> {
        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit record transaction");
            DomainError::DatabaseError(e.to_string())
        })
    }

    /// Advances the zone's `updated_at` to now, or one second past its
    /// current value when the clock has not moved on.
    async fn touch_zone(
        tx: &mut Transaction<'static, Sqlite>,
        zone_id: i64,
        now: i64,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE zones SET updated_at = MAX(?, updated_at + 1) WHERE id = ?")
            .bind(now)
            .bind(zone_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                error!(error = %e, zone_id = zone_id, "Failed to touch zone");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ZoneNotFound(format!("Zone {} not found", zone_id)));
        }

        debug!(zone_id = zone_id, "Zone serial advanced");
        Ok(())
    }

    async fn fetch(
        tx: &mut Transaction<'static, Sqlite>,
        id: i64,
    ) -> Result<Option<ResourceRecord>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT id, zone_id, name, type, ttl, data, created_at, updated_at
             FROM resource_records WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query resource record by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_record))
    }
}

#[async_trait]
impl ResourceRecordRepository for SqliteResourceRecordRepository {
    #[instrument(skip(self, data))]
    async fn create(
        &self,
        zone_id: i64,
        name: String,
        record_type: String,
        ttl: Option<u32>,
        data: String,
    ) -> Result<ResourceRecord, DomainError> {
        let now = chrono::Utc::now().timestamp();
        let mut tx = self.begin().await?;

        // Touch first: a missing zone aborts before anything is inserted.
        Self::touch_zone(&mut tx, zone_id, now).await?;

        let row = sqlx::query_as::<_, RecordRow>(
            "INSERT INTO resource_records (zone_id, name, type, ttl, data, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING id, zone_id, name, type, ttl, data, created_at, updated_at",
        )
        .bind(zone_id)
        .bind(&name)
        .bind(record_type.to_ascii_uppercase())
        .bind(ttl.map(i64::from))
        .bind(&data)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create resource record");
            DomainError::DatabaseError(e.to_string())
        })?;

        Self::commit(tx).await?;
        Ok(Self::row_to_record(row))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<ResourceRecord>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT id, zone_id, name, type, ttl, data, created_at, updated_at
             FROM resource_records WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query resource record by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_record))
    }

    #[instrument(skip(self, data))]
    async fn update(
        &self,
        id: i64,
        name: Option<String>,
        record_type: Option<String>,
        ttl: Option<u32>,
        data: Option<String>,
    ) -> Result<ResourceRecord, DomainError> {
        let now = chrono::Utc::now().timestamp();
        let mut tx = self.begin().await?;

        let current = Self::fetch(&mut tx, id)
            .await?
            .ok_or(DomainError::RecordNotFound(id))?;

        let final_name = name.unwrap_or_else(|| current.name.to_string());
        let final_type = record_type
            .map(|t| t.to_ascii_uppercase())
            .unwrap_or_else(|| current.record_type.to_string());
        let final_ttl = ttl.or(current.ttl);
        let final_data = data.unwrap_or_else(|| current.data.to_string());

        let row = sqlx::query_as::<_, RecordRow>(
            "UPDATE resource_records
             SET name = ?, type = ?, ttl = ?, data = ?, updated_at = ?
             WHERE id = ?
             RETURNING id, zone_id, name, type, ttl, data, created_at, updated_at",
        )
        .bind(&final_name)
        .bind(&final_type)
        .bind(final_ttl.map(i64::from))
        .bind(&final_data)
        .bind(now)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update resource record");
            DomainError::DatabaseError(e.to_string())
        })?
        .ok_or(DomainError::RecordNotFound(id))?;

        Self::touch_zone(&mut tx, current.zone_id, now).await?;
        Self::commit(tx).await?;

        Ok(Self::row_to_record(row))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let now = chrono::Utc::now().timestamp();
        let mut tx = self.begin().await?;

        let zone_id = sqlx::query_as::<_, (i64,)>(
            "DELETE FROM resource_records WHERE id = ? RETURNING zone_id",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to delete resource record");
            DomainError::DatabaseError(e.to_string())
        })?
        .map(|(zone_id,)| zone_id)
        .ok_or(DomainError::RecordNotFound(id))?;

        Self::touch_zone(&mut tx, zone_id, now).await?;
        Self::commit(tx).await
    }

    #[instrument(skip(self))]
    async fn find_by_name(
        &self,
        name: &str,
        limit: u32,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, zone_id, name, type, ttl, data, created_at, updated_at
             FROM resource_records WHERE name = ? ORDER BY id ASC LIMIT ?",
        )
        .bind(name)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query resource records by name");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_name_and_type(
        &self,
        name: &str,
        record_type: &str,
        limit: u32,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, zone_id, name, type, ttl, data, created_at, updated_at
             FROM resource_records WHERE name = ? AND type = ? ORDER BY id ASC LIMIT ?",
        )
        .bind(name)
        .bind(record_type.to_ascii_uppercase())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query resource records by name and type");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_zone(
        &self,
        zone_id: i64,
        limit: u32,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, zone_id, name, type, ttl, data, created_at, updated_at
             FROM resource_records WHERE zone_id = ? ORDER BY id ASC LIMIT ?",
        )
        .bind(zone_id)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query resource records by zone");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }
}
