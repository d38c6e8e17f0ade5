use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};
use zonecast_application::ports::DelegateRepository;
use zonecast_domain::{Delegate, DomainError, MAX_ANSWER_RECORDS};

use super::{from_epoch, is_unique_violation};

type DelegateRow = (i64, String, String, i64, i64);

pub struct SqliteDelegateRepository {
    pool: SqlitePool,
}

impl SqliteDelegateRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_delegate(row: DelegateRow) -> Delegate {
        let (id, domain, base_url, created_at, updated_at) = row;
        Delegate {
            id,
            domain: Arc::from(domain.as_str()),
            base_url: Arc::from(base_url.as_str()),
            created_at: from_epoch(created_at),
            updated_at: from_epoch(updated_at),
        }
    }
}

#[async_trait]
impl DelegateRepository for SqliteDelegateRepository {
    #[instrument(skip(self))]
    async fn create(&self, domain: String, base_url: String) -> Result<Delegate, DomainError> {
        let now = chrono::Utc::now().timestamp();

        let row = sqlx::query_as::<_, DelegateRow>(
            "INSERT INTO delegates (domain, base_url, created_at, updated_at)
             VALUES (?, ?, ?, ?)
             RETURNING id, domain, base_url, created_at, updated_at",
        )
        .bind(&domain)
        .bind(&base_url)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::DelegateAlreadyExists(domain.clone())
            } else {
                error!(error = %e, "Failed to create delegate");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        Ok(Self::row_to_delegate(row))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Delegate>, DomainError> {
        let row = sqlx::query_as::<_, DelegateRow>(
            "SELECT id, domain, base_url, created_at, updated_at FROM delegates WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query delegate by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_delegate))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Delegate>, DomainError> {
        let rows = sqlx::query_as::<_, DelegateRow>(
            "SELECT id, domain, base_url, created_at, updated_at
             FROM delegates ORDER BY id ASC LIMIT ?",
        )
        .bind(MAX_ANSWER_RECORDS as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all delegates");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_delegate).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_domain(&self, domain: &str) -> Result<Option<Delegate>, DomainError> {
        let row = sqlx::query_as::<_, DelegateRow>(
            "SELECT id, domain, base_url, created_at, updated_at FROM delegates WHERE domain = ?",
        )
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query delegate by domain");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_delegate))
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: i64,
        domain: Option<String>,
        base_url: Option<String>,
    ) -> Result<Delegate, DomainError> {
        let now = chrono::Utc::now().timestamp();

        let current = self
            .get_by_id(id)
            .await?
            .ok_or(DomainError::DelegateNotFound(id))?;

        let final_domain = domain.unwrap_or_else(|| current.domain.to_string());
        let final_base_url = base_url.unwrap_or_else(|| current.base_url.to_string());

        let row = sqlx::query_as::<_, DelegateRow>(
            "UPDATE delegates SET domain = ?, base_url = ?, updated_at = ?
             WHERE id = ?
             RETURNING id, domain, base_url, created_at, updated_at",
        )
        .bind(&final_domain)
        .bind(&final_base_url)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::DelegateAlreadyExists(final_domain.clone())
            } else {
                error!(error = %e, "Failed to update delegate");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        row.map(Self::row_to_delegate)
            .ok_or(DomainError::DelegateNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM delegates WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete delegate");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DelegateNotFound(id));
        }

        Ok(())
    }
}
