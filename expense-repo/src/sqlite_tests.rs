//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use expense_types::{CategoryId, Expenditure, ExpenditureId, ExpenditureRepository, RepoError};

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn expenditure(description: &str, amount: f64) -> Expenditure {
        Expenditure::new(
            description.to_string(),
            amount,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let repo = setup_repo().await;
        let exp = expenditure("Coffee", 3.5);

        repo.add_expenditure(exp.clone()).await.unwrap();
        let fetched = repo.get_expenditure(exp.id).await.unwrap();

        assert_eq!(fetched, exp);
    }

    #[tokio::test]
    async fn test_category_reference_round_trips() {
        let repo = setup_repo().await;
        let category = CategoryId::from_name("Travel");
        let exp = Expenditure::new(
            "Train ticket".to_string(),
            59.9,
            Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap(),
            Some(category),
        )
        .unwrap();

        repo.add_expenditure(exp.clone()).await.unwrap();

        let fetched = repo.get_expenditure(exp.id).await.unwrap();
        assert_eq!(fetched.category_id, Some(category));
    }

    #[tokio::test]
    async fn test_sub_microsecond_date_round_trips() {
        let repo = setup_repo().await;
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);
        let exp = Expenditure::new("Coffee".to_string(), 3.5, date, None).unwrap();

        repo.add_expenditure(exp.clone()).await.unwrap();

        let fetched = repo.get_expenditure(exp.id).await.unwrap();
        assert_eq!(fetched, exp);
        assert_eq!(fetched.date.timestamp_subsec_nanos(), 123_456_000);
    }

    #[tokio::test]
    async fn test_add_duplicate_is_rejected() {
        let repo = setup_repo().await;
        let exp = expenditure("Coffee", 3.5);
        repo.add_expenditure(exp.clone()).await.unwrap();

        let result = repo.add_expenditure(exp).await;

        assert!(matches!(result, Err(RepoError::AlreadyExists)));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let repo = setup_repo().await;

        let result = repo.get_expenditure(ExpenditureId::new()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_expenditures() {
        let repo = setup_repo().await;
        repo.add_expenditure(expenditure("Coffee", 3.5)).await.unwrap();
        repo.add_expenditure(expenditure("Rent", 950.0)).await.unwrap();

        let all = repo.list_expenditures().await.unwrap();

        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|e| e.description == "Rent" && e.amount == 950.0));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = setup_repo().await;
        let exp = expenditure("Coffee", 3.5);
        repo.add_expenditure(exp.clone()).await.unwrap();

        let replacement = Expenditure::with_id(
            exp.id,
            "Espresso".to_string(),
            2.2,
            Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap(),
            Some(CategoryId::from_name("Food & Dining")),
        )
        .unwrap();
        repo.update_expenditure(replacement.clone()).await.unwrap();

        let fetched = repo.get_expenditure(exp.id).await.unwrap();
        assert_eq!(fetched, replacement);
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let repo = setup_repo().await;

        let result = repo.update_expenditure(expenditure("Coffee", 3.5)).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
        assert!(repo.list_expenditures().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let repo = setup_repo().await;
        let exp = expenditure("Coffee", 3.5);
        repo.add_expenditure(exp.clone()).await.unwrap();

        repo.delete_expenditure(exp.id).await.unwrap();

        assert!(matches!(
            repo.get_expenditure(exp.id).await,
            Err(RepoError::NotFound)
        ));
        assert!(matches!(
            repo.delete_expenditure(exp.id).await,
            Err(RepoError::NotFound)
        ));
    }
}
