//! Database row types and their conversion into domain records.

use sqlx::FromRow;

use expense_types::{CategoryId, Expenditure, ExpenditureId, RepoError};

/// Expenditure row from PostgreSQL.
#[cfg(feature = "postgres")]
#[derive(FromRow)]
pub struct PgExpenditure {
    pub id: uuid::Uuid,
    pub description: String,
    pub amount: f64,
    pub date: chrono::DateTime<chrono::Utc>,
    pub category_id: Option<uuid::Uuid>,
}

#[cfg(feature = "postgres")]
impl PgExpenditure {
    /// Convert database row to domain Expenditure.
    pub fn into_domain(self) -> Expenditure {
        Expenditure::from_parts(
            ExpenditureId::from_uuid(self.id),
            self.description,
            self.amount,
            self.date,
            self.category_id.map(CategoryId::from_uuid),
        )
    }
}

/// Expenditure row from SQLite, where ids and dates are stored as TEXT.
#[cfg(feature = "sqlite")]
#[derive(FromRow)]
pub struct SqliteExpenditure {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub category_id: Option<String>,
}

#[cfg(feature = "sqlite")]
impl SqliteExpenditure {
    /// Convert database row to domain Expenditure.
    pub fn into_domain(self) -> Result<Expenditure, RepoError> {
        let id = uuid::Uuid::parse_str(&self.id).map_err(|e| RepoError::Database(e.to_string()))?;

        let date = chrono::DateTime::parse_from_rfc3339(&self.date)
            .map_err(|e| RepoError::Database(e.to_string()))?
            .with_timezone(&chrono::Utc);

        let category_id = self
            .category_id
            .map(|s| uuid::Uuid::parse_str(&s))
            .transpose()
            .map_err(|e| RepoError::Database(e.to_string()))?
            .map(CategoryId::from_uuid);

        Ok(Expenditure::from_parts(
            ExpenditureId::from_uuid(id),
            self.description,
            self.amount,
            date,
            category_id,
        ))
    }
}

/// Maps any sqlx failure onto the backend-failure variant.
pub fn db_err(e: sqlx::Error) -> RepoError {
    RepoError::Database(e.to_string())
}
