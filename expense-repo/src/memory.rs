//! In-memory expenditure repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use expense_types::{Expenditure, ExpenditureId, ExpenditureRepository, RepoError};

/// In-process store guarded by a single reader/writer lock.
///
/// Mutations take the write lock, lookups take the read lock, and every
/// operation holds the lock for exactly one critical section. The map itself
/// is never handed out.
#[derive(Default)]
pub struct MemoryExpenditureRepo {
    expenditures: RwLock<HashMap<ExpenditureId, Expenditure>>,
}

impl MemoryExpenditureRepo {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenditureRepository for MemoryExpenditureRepo {
    async fn add_expenditure(&self, expenditure: Expenditure) -> Result<(), RepoError> {
        tracing::debug!(
            id = %expenditure.id,
            description = %expenditure.description,
            amount = expenditure.amount,
            date = %expenditure.date,
            category_id = ?expenditure.category_id,
            "Adding expenditure"
        );

        let mut expenditures = self.expenditures.write().await;

        if expenditures.contains_key(&expenditure.id) {
            tracing::warn!(id = %expenditure.id, "Expenditure already exists");
            return Err(RepoError::AlreadyExists);
        }

        let id = expenditure.id;
        expenditures.insert(id, expenditure);
        tracing::info!(%id, total_count = expenditures.len(), "Expenditure added");
        Ok(())
    }

    async fn get_expenditure(&self, id: ExpenditureId) -> Result<Expenditure, RepoError> {
        tracing::debug!(%id, "Getting expenditure by ID");

        let expenditures = self.expenditures.read().await;
        match expenditures.get(&id) {
            Some(expenditure) => Ok(expenditure.clone()),
            None => {
                tracing::warn!(%id, "Expenditure not found");
                Err(RepoError::NotFound)
            }
        }
    }

    async fn list_expenditures(&self) -> Result<Vec<Expenditure>, RepoError> {
        let expenditures: Vec<Expenditure> =
            self.expenditures.read().await.values().cloned().collect();

        tracing::debug!(count = expenditures.len(), "Retrieved all expenditures");
        Ok(expenditures)
    }

    async fn update_expenditure(&self, expenditure: Expenditure) -> Result<(), RepoError> {
        tracing::debug!(
            id = %expenditure.id,
            description = %expenditure.description,
            amount = expenditure.amount,
            date = %expenditure.date,
            category_id = ?expenditure.category_id,
            "Updating expenditure"
        );

        let mut expenditures = self.expenditures.write().await;

        match expenditures.get_mut(&expenditure.id) {
            Some(stored) => {
                *stored = expenditure;
                tracing::info!(id = %stored.id, "Expenditure updated");
                Ok(())
            }
            None => {
                tracing::warn!(id = %expenditure.id, "Expenditure not found for update");
                Err(RepoError::NotFound)
            }
        }
    }

    async fn delete_expenditure(&self, id: ExpenditureId) -> Result<(), RepoError> {
        tracing::debug!(%id, "Deleting expenditure");

        let mut expenditures = self.expenditures.write().await;

        if expenditures.remove(&id).is_none() {
            tracing::warn!(%id, "Expenditure not found for deletion");
            return Err(RepoError::NotFound);
        }

        tracing::info!(%id, remaining_count = expenditures.len(), "Expenditure deleted");
        Ok(())
    }
}
