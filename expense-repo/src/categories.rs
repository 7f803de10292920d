//! Seeded, read-only category store.

use std::collections::HashMap;

use async_trait::async_trait;

use expense_types::{Category, CategoryId, CategoryRepository, RepoError};

/// The fixed palette every store starts with, as `(name, color)`.
pub const DEFAULT_CATEGORIES: [(&str, &str); 13] = [
    ("Food & Dining", "#FF6B6B"),
    ("Transportation", "#4ECDC4"),
    ("Housing", "#1A535C"),
    ("Utilities", "#FFE66D"),
    ("Health & Fitness", "#2EC4B6"),
    ("Entertainment", "#FF9F1C"),
    ("Shopping", "#C084FC"),
    ("Travel", "#00A8E8"),
    ("Education", "#6D6875"),
    ("Financial Services", "#5D2E8C"),
    ("Personal Care", "#FFB6B9"),
    ("Gifts & Donations", "#FF7E67"),
    ("Miscellaneous", "#A0AEC0"),
];

/// In-memory category store, used by both storage modes.
///
/// Read-only after seeding.
pub struct MemoryCategoryRepo {
    categories: HashMap<CategoryId, Category>,
}

impl MemoryCategoryRepo {
    /// Creates a store holding the default palette.
    pub fn seeded() -> Self {
        let categories: HashMap<CategoryId, Category> = DEFAULT_CATEGORIES
            .iter()
            .filter_map(|(name, color)| match Category::seeded(name, color) {
                Ok(category) => Some((category.id, category)),
                Err(e) => {
                    tracing::error!(%name, error = %e, "Skipping invalid seed category");
                    None
                }
            })
            .collect();

        tracing::debug!(count = categories.len(), "Seeded categories");
        Self { categories }
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepo {
    async fn get_category(&self, id: CategoryId) -> Result<Category, RepoError> {
        self.categories
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepoError> {
        Ok(self.categories.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeds_thirteen_categories() {
        let repo = MemoryCategoryRepo::seeded();
        let categories = repo.list_categories().await.unwrap();

        assert_eq!(categories.len(), 13);
        assert!(
            categories
                .iter()
                .any(|c| c.name == "Travel" && c.color == "#00A8E8")
        );
    }

    #[tokio::test]
    async fn test_get_seeded_category() {
        let repo = MemoryCategoryRepo::seeded();
        let id = CategoryId::from_name("Housing");

        let category = repo.get_category(id).await.unwrap();

        assert_eq!(category.name, "Housing");
        assert_eq!(category.color, "#1A535C");
    }

    #[tokio::test]
    async fn test_get_unknown_category() {
        let repo = MemoryCategoryRepo::seeded();
        let result = repo.get_category(CategoryId::new()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_concurrent_reads_share_one_store() {
        let repo = std::sync::Arc::new(MemoryCategoryRepo::seeded());

        let handles: Vec<_> = DEFAULT_CATEGORIES
            .iter()
            .map(|(name, _)| {
                let repo = repo.clone();
                let id = CategoryId::from_name(name);
                tokio::spawn(async move { repo.get_category(id).await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
    }
}
