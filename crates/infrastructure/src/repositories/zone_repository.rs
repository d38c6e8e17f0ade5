use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};
use zonecast_application::ports::ZoneRepository;
use zonecast_domain::{DomainError, Zone, MAX_ANSWER_RECORDS};

use super::{from_epoch, is_unique_violation};

type ZoneRow = (i64, String, String, i64, i64, i64);

pub struct SqliteZoneRepository {
    pool: SqlitePool,
}

impl SqliteZoneRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_zone(row: ZoneRow) -> Zone {
        let (id, domain, owner, ttl, created_at, updated_at) = row;
        Zone {
            id,
            domain: Arc::from(domain.as_str()),
            owner: Arc::from(owner.as_str()),
            ttl: ttl.clamp(1, u32::MAX as i64) as u32,
            created_at: from_epoch(created_at),
            updated_at: from_epoch(updated_at),
        }
    }
}

#[async_trait]
impl ZoneRepository for SqliteZoneRepository {
    #[instrument(skip(self))]
    async fn create(&self, domain: String, owner: String, ttl: u32) -> Result<Zone, DomainError> {
        let now = chrono::Utc::now().timestamp();

        let row = sqlx::query_as::<_, ZoneRow>(
            "INSERT INTO zones (domain, owner, ttl, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, domain, owner, ttl, created_at, updated_at",
        )
        .bind(&domain)
        .bind(&owner)
        .bind(ttl as i64)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::ZoneAlreadyExists(domain.clone())
            } else {
                error!(error = %e, "Failed to create zone");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        Ok(Self::row_to_zone(row))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Zone>, DomainError> {
        let row = sqlx::query_as::<_, ZoneRow>(
            "SELECT id, domain, owner, ttl, created_at, updated_at
             FROM zones WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query zone by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_zone))
    }

    #[instrument(skip(self))]
    async fn get_by_domain(&self, domain: &str) -> Result<Option<Zone>, DomainError> {
        let row = sqlx::query_as::<_, ZoneRow>(
            "SELECT id, domain, owner, ttl, created_at, updated_at
             FROM zones WHERE domain = ?",
        )
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query zone by domain");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_zone))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Zone>, DomainError> {
        let rows = sqlx::query_as::<_, ZoneRow>(
            "SELECT id, domain, owner, ttl, created_at, updated_at
             FROM zones ORDER BY id ASC LIMIT ?",
        )
        .bind(MAX_ANSWER_RECORDS as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all zones");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_zone).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_owner(&self, owner: &str) -> Result<Vec<Zone>, DomainError> {
        let rows = sqlx::query_as::<_, ZoneRow>(
            "SELECT id, domain, owner, ttl, created_at, updated_at
             FROM zones WHERE owner = ? ORDER BY id ASC LIMIT ?",
        )
        .bind(owner)
        .bind(MAX_ANSWER_RECORDS as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query zones by owner");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_zone).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM zones WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete zone");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ZoneNotFound(format!("Zone {} not found", id)));
        }

        Ok(())
    }
}
