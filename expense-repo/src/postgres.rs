//! PostgreSQL repository adapter.
//!
//! Writes are a two-step check-then-act: an existence point query followed by
//! the write. Two concurrent writers targeting the same id can both pass the
//! check; ids are server-generated v4 UUIDs, so this is not guarded further.

use async_trait::async_trait;
use sqlx::PgPool;

use expense_types::{Expenditure, ExpenditureId, ExpenditureRepository, RepoError};

use crate::types::{PgExpenditure, db_err};

/// PostgreSQL-backed expenditure store.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

impl PostgresRepo {
    /// Connects and creates the `expenditures` table if absent.
    ///
    /// Either failure is returned to the caller, which treats it as fatal.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        execute_migration(
            &pool,
            include_str!("../migrations/0001_create_expenditures_pg.sql"),
            "0001",
        )
        .await?;
        Ok(Self { pool })
    }

    async fn exists(&self, id: ExpenditureId) -> Result<bool, RepoError> {
        sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM expenditures WHERE id = $1)"#,
        )
        .bind(id.into_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(%id, error = %e, "Error checking if expenditure exists");
            db_err(e)
        })
    }
}

#[async_trait]
impl ExpenditureRepository for PostgresRepo {
    async fn add_expenditure(&self, expenditure: Expenditure) -> Result<(), RepoError> {
        tracing::debug!(id = %expenditure.id, "Adding expenditure to database");

        if self.exists(expenditure.id).await? {
            tracing::warn!(id = %expenditure.id, "Expenditure already exists");
            return Err(RepoError::AlreadyExists);
        }

        sqlx::query(
            r#"INSERT INTO expenditures (id, description, amount, date, category_id) VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(expenditure.id.into_uuid())
        .bind(&expenditure.description)
        .bind(expenditure.amount)
        .bind(expenditure.date)
        .bind(expenditure.category_id.map(|c| c.into_uuid()))
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

        let row: Option<PgExpenditure> = sqlx::query_as(
            r#"SELECT id, description, amount, date, category_id FROM expenditures WHERE id = $1"#,
        )
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(%id, error = %e, "Error querying expenditure");
            db_err(e)
        })?;

        match row {
            Some(row) => Ok(row.into_domain()),
            None => {
                tracing::warn!(%id, "Expenditure not found");
                Err(RepoError::NotFound)
            }
        }
    }

    async fn list_expenditures(&self) -> Result<Vec<Expenditure>, RepoError> {
        let rows: Vec<PgExpenditure> = sqlx::query_as(
            r#"SELECT id, description, amount, date, category_id FROM expenditures"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error querying all expenditures");
            db_err(e)
        })?;

        tracing::debug!(count = rows.len(), "Retrieved all expenditures");
        Ok(rows.into_iter().map(PgExpenditure::into_domain).collect())
    }

    async fn update_expenditure(&self, expenditure: Expenditure) -> Result<(), RepoError> {
        tracing::debug!(id = %expenditure.id, "Updating expenditure");

        if !self.exists(expenditure.id).await? {
            tracing::warn!(id = %expenditure.id, "Expenditure not found for update");
            return Err(RepoError::NotFound);
        }

        sqlx::query(
            r#"UPDATE expenditures SET description = $1, amount = $2, date = $3, category_id = $4 WHERE id = $5"#,
        )
        .bind(&expenditure.description)
        .bind(expenditure.amount)
        .bind(expenditure.date)
        .bind(expenditure.category_id.map(|c| c.into_uuid()))
        .bind(expenditure.id.into_uuid())
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

        sqlx::query(r#"DELETE FROM expenditures WHERE id = $1"#)
            .bind(id.into_uuid())
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
