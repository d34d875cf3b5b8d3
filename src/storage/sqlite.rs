use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::application::{Application, NewApplication};
use crate::storage::ApplicationStore;

const SELECT_COLUMNS: &str =
    "id, company_name, position, status, application_date, notes, created_at, updated_at";

/// Relational store backed by a single `applications` table. The
/// AUTOINCREMENT primary key gives the never-reuse id guarantee.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for SqliteStore {
    async fn list(&self, status: Option<&str>) -> Result<Vec<Application>> {
        let items = match status {
            Some(wanted) => {
                sqlx::query_as::<_, Application>(&format!(
                    "SELECT {} FROM applications WHERE status = ? ORDER BY id",
                    SELECT_COLUMNS
                ))
                .bind(wanted)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Application>(&format!(
                    "SELECT {} FROM applications ORDER BY id",
                    SELECT_COLUMNS
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(items)
    }

    async fn get(&self, id: i64) -> Result<Option<Application>> {
        let record = sqlx::query_as::<_, Application>(&format!(
            "SELECT {} FROM applications WHERE id = ?",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn insert(&self, new: NewApplication) -> Result<Application> {
        let record = sqlx::query_as::<_, Application>(&format!(
            "INSERT INTO applications \
             (company_name, position, status, application_date, notes, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING {}",
            SELECT_COLUMNS
        ))
        .bind(&new.company_name)
        .bind(&new.position)
        .bind(&new.status)
        .bind(&new.application_date)
        .bind(&new.notes)
        .bind(new.created_at)
        .bind(new.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    async fn replace(&self, record: &Application) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE applications \
             SET company_name = ?, position = ?, status = ?, application_date = ?, \
                 notes = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&record.company_name)
        .bind(&record.position)
        .bind(&record.status)
        .bind(&record.application_date)
        .bind(&record.notes)
        .bind(record.updated_at)
        .bind(record.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM applications WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
