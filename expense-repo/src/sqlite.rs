//! SQLite repository adapter.
//!
//! Same check-then-act write pattern as the PostgreSQL adapter; ids and dates
//! are stored as TEXT (UUID string and RFC 3339 respectively).
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use expense_types::{Expenditure, ExpenditureId, ExpenditureRepository, RepoError};

use crate::types::{SqliteExpenditure, db_err};

/// SQLite-backed expenditure store.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Opens (creating if missing) the database and creates the table if absent.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        // Every connection to `:memory:` opens a fresh database, so keep exactly one.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePool::connect_with(options).await?
        };

        let ddl = include_str!("../migrations/0001_create_expenditures.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    async fn exists(&self, id: ExpenditureId) -> Result<bool, RepoError> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(1) FROM expenditures WHERE id = ?"#)
            .bind(id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(%id, error = %e, "Error checking if expenditure exists");
                db_err(e)
            })?;
        Ok(count > 0)
    }
}

#[async_trait]
impl ExpenditureRepository for SqliteRepo {
    async fn add_expenditure(&self, expenditure: Expenditure) -> Result<(), RepoError> {
        tracing::debug!(id = %expenditure.id, "Adding expenditure to database");

        if self.exists(expenditure.id).await? {
            tracing::warn!(id = %expenditure.id, "Expenditure already exists");
            return Err(RepoError::AlreadyExists);
        }

        sqlx::query(
            r#"INSERT INTO expenditures (id, description, amount, date, category_id) VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(expenditure.id.to_string())
        .bind(&expenditure.description)
        .bind(expenditure.amount)
        .bind(expenditure.date.to_rfc3339())
        .bind(expenditure.category_id.map(|c| c.to_string()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(id = %expenditure.id, error = %e, "Error inserting expenditure");
            db_err(e)
        })?;

        tracing::info!(id = %expenditure.id, "Expenditure added");
        Ok(())
    }

    async fn get_expenditure(&self, id: ExpenditureId) -> Result<Expenditure, RepoError> {
        tracing::debug!(%id, "Getting expenditure by ID");

        let row: Option<SqliteExpenditure> = sqlx::query_as(
            r#"SELECT id, description, amount, date, category_id FROM expenditures WHERE id = ?"#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(%id, error = %e, "Error querying expenditure");
            db_err(e)
        })?;

        match row {
            Some(row) => row.into_domain(),
            None => {
                tracing::warn!(%id, "Expenditure not found");
                Err(RepoError::NotFound)
            }
        }
    }

    async fn list_expenditures(&self) -> Result<Vec<Expenditure>, RepoError> {
        let rows: Vec<SqliteExpenditure> = sqlx::query_as(
            r#"SELECT id, description, amount, date, category_id FROM expenditures"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error querying all expenditures");
            db_err(e)
        })?;

        tracing::debug!(count = rows.len(), "Retrieved all expenditures");
        rows.into_iter().map(SqliteExpenditure::into_domain).collect()
    }

    async fn update_expenditure(&self, expenditure: Expenditure) -> Result<(), RepoError> {
        tracing::debug!(id = %expenditure.id, "Updating expenditure");

        if !self.exists(expenditure.id).await? {
            tracing::warn!(id = %expenditure.id, "Expenditure not found for update");
            return Err(RepoError::NotFound);
        }

        sqlx::query(
            r#"UPDATE expenditures SET description = ?, amount = ?, date = ?, category_id = ? WHERE id = ?"#,
        )
        .bind(&expenditure.description)
        .bind(expenditure.amount)
        .bind(expenditure.date.to_rfc3339())
        .bind(expenditure.category_id.map(|c| c.to_string()))
        .bind(expenditure.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(id = %expenditure.id, error = %e, "Error updating expenditure");
            db_err(e)
        })?;

        tracing::info!(id = %expenditure.id, "Expenditure updated");
        Ok(())
    }

    async fn delete_expenditure(&self, id: ExpenditureId) -> Result<(), RepoError> {
        tracing::debug!(%id, "Deleting expenditure");

        if !self.exists(id).await? {
            tracing::warn!(%id, "Expenditure not found for deletion");
            return Err(RepoError::NotFound);
        }

        sqlx::query(r#"DELETE FROM expenditures WHERE id = ?"#)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(%id, error = %e, "Error deleting expenditure");
                db_err(e)
            })?;

        tracing::info!(%id, "Expenditure deleted");
        Ok(())
    }
}
