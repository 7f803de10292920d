//! Repository port traits.
//!
//! These are the primary ports in our hexagonal architecture.
//! Adapters (InMemory, Postgres, SQLite) implement them.

use crate::domain::{Category, CategoryId, Expenditure, ExpenditureId};
use crate::error::RepoError;

/// Storage contract for expenditures.
///
/// Every operation touches a single record and is all-or-nothing.
/// Failures use the shared sentinels `RepoError::NotFound` and
/// `RepoError::AlreadyExists` regardless of backend.
#[async_trait::async_trait]
pub trait ExpenditureRepository: Send + Sync + 'static {
    /// Stores a new expenditure. Fails with `AlreadyExists` if the id is taken.
    async fn add_expenditure(&self, expenditure: Expenditure) -> Result<(), RepoError>;

    /// Gets an expenditure by ID. Fails with `NotFound` if absent.
    async fn get_expenditure(&self, id: ExpenditureId) -> Result<Expenditure, RepoError>;

    /// Lists every stored expenditure, in no particular order.
    async fn list_expenditures(&self) -> Result<Vec<Expenditure>, RepoError>;

    /// Replaces a stored expenditure. Fails with `NotFound` if absent.
    async fn update_expenditure(&self, expenditure: Expenditure) -> Result<(), RepoError>;

    /// Removes an expenditure. Fails with `NotFound` if absent.
    async fn delete_expenditure(&self, id: ExpenditureId) -> Result<(), RepoError>;
}

/// Read-only storage contract for categories.
#[async_trait::async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Gets a category by ID. Fails with `NotFound` if absent.
    async fn get_category(&self, id: CategoryId) -> Result<Category, RepoError>;

    /// Lists every category, in no particular order.
    async fn list_categories(&self) -> Result<Vec<Category>, RepoError>;
}
