//! Expense Application Service
//!
//! Orchestrates domain validation and repository calls.
//! Contains NO infrastructure logic - only business orchestration.

use expense_types::{
    AppError, Category, CategoryId, CategoryRepository, DomainError, Expenditure, ExpenditureId,
    ExpenditureRepository, ExpenditureRequest, RepoError,
};

/// Application service for expense operations.
///
/// Generic over both repository ports so the backend is injected once at
/// startup. Validation happens here and in the domain constructors, so a
/// rejected request never reaches the store.
pub struct ExpenseService<E: ExpenditureRepository, C: CategoryRepository> {
    expenditures: E,
    categories: C,
}

impl<E: ExpenditureRepository, C: CategoryRepository> ExpenseService<E, C> {
    /// Creates a new expense service over the given stores.
    pub fn new(expenditures: E, categories: C) -> Self {
        Self {
            expenditures,
            categories,
        }
    }

    #[cfg(test)]
    pub(crate) fn expenditures(&self) -> &E {
        &self.expenditures
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Expenditure Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Validates and stores a new expenditure.
    pub async fn create_expenditure(
        &self,
        req: ExpenditureRequest,
    ) -> Result<Expenditure, AppError> {
        let expenditure =
            Expenditure::new(req.description, req.amount, req.date, req.category_id)?;
        self.ensure_category_exists(expenditure.category_id).await?;

        self.expenditures
            .add_expenditure(expenditure.clone())
            .await?;
        Ok(expenditure)
    }

    /// Gets an expenditure by ID.
    pub async fn get_expenditure(&self, id: ExpenditureId) -> Result<Expenditure, AppError> {
        self.expenditures
            .get_expenditure(id)
            .await
            .map_err(expenditure_error)
    }

    /// Lists all expenditures.
    pub async fn list_expenditures(&self) -> Result<Vec<Expenditure>, AppError> {
        self.expenditures
            .list_expenditures()
            .await
            .map_err(Into::into)
    }

    /// Replaces every field of an existing expenditure.
    ///
    /// A missing record surfaces as `NotFound` from the store once the
    /// replacement has passed validation.
    pub async fn update_expenditure(
        &self,
        id: ExpenditureId,
        req: ExpenditureRequest,
    ) -> Result<Expenditure, AppError> {
        let expenditure =
            Expenditure::with_id(id, req.description, req.amount, req.date, req.category_id)?;
        self.ensure_category_exists(expenditure.category_id).await?;

        self.expenditures
            .update_expenditure(expenditure.clone())
            .await
            .map_err(expenditure_error)?;
        Ok(expenditure)
    }

    /// Deletes an expenditure.
    pub async fn delete_expenditure(&self, id: ExpenditureId) -> Result<(), AppError> {
        self.expenditures
            .delete_expenditure(id)
            .await
            .map_err(expenditure_error)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Category Operations (read-only)
    // ─────────────────────────────────────────────────────────────────────────────

    /// Gets a category by ID.
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, AppError> {
        self.categories
            .get_category(id)
            .await
            .map_err(|e| match e {
                RepoError::NotFound => AppError::NotFound("category not found".into()),
                other => other.into(),
            })
    }

    /// Lists all categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.categories.list_categories().await.map_err(Into::into)
    }

    async fn ensure_category_exists(&self, id: Option<CategoryId>) -> Result<(), AppError> {
        let Some(id) = id else {
            return Ok(());
        };

        match self.categories.get_category(id).await {
            Ok(_) => Ok(()),
            Err(RepoError::NotFound) => Err(DomainError::CategoryNotFound(id).into()),
            Err(e) => Err(e.into()),
        }
    }
}

fn expenditure_error(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound => AppError::NotFound("expenditure not found".into()),
        other => other.into(),
    }
}
