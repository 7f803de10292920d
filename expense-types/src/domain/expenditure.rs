//! Expenditure domain model.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::category::CategoryId;
use crate::error::DomainError;

/// Unique identifier for an Expenditure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ExpenditureId(Uuid);

impl ExpenditureId {
    /// Creates a new random ExpenditureId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an ExpenditureId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns the UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for ExpenditureId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ExpenditureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ExpenditureId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A single recorded monetary outlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Expenditure {
    /// Unique identifier, assigned on creation
    pub id: ExpenditureId,
    /// What the money was spent on
    #[schema(example = "Coffee")]
    pub description: String,
    /// Amount spent (currency-agnostic)
    #[schema(example = 3.5)]
    pub amount: f64,
    /// When the expenditure occurred
    pub date: DateTime<Utc>,
    /// Optional category this expenditure belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl Expenditure {
    /// Creates a new expenditure with a fresh identifier.
    ///
    /// # Validation
    /// - Description cannot be empty
    /// - Amount must be positive
    /// - Date cannot be after the current time
    /// - A supplied category reference cannot be the nil UUID
    pub fn new(
        description: String,
        amount: f64,
        date: DateTime<Utc>,
        category_id: Option<CategoryId>,
    ) -> Result<Self, DomainError> {
        Self::with_id(ExpenditureId::new(), description, amount, date, category_id)
    }

    /// Builds a validated expenditure that keeps an existing identifier.
    ///
    /// Used when an update replaces a stored record wholesale. The date is
    /// truncated to microseconds, the finest precision every backend keeps.
    pub fn with_id(
        id: ExpenditureId,
        description: String,
        amount: f64,
        date: DateTime<Utc>,
        category_id: Option<CategoryId>,
    ) -> Result<Self, DomainError> {
        if description.is_empty() {
            return Err(DomainError::DescriptionEmpty);
        }

        if !amount.is_finite() || amount <= 0.0 {
            return Err(DomainError::InvalidAmount);
        }

        if date > Utc::now() {
            return Err(DomainError::FutureDate);
        }

        if category_id.is_some_and(|c| c.as_uuid().is_nil()) {
            return Err(DomainError::CategoryEmpty);
        }

        Ok(Self {
            id,
            description,
            amount,
            date: date.trunc_subsecs(6),
            category_id,
        })
    }

    /// Creates an expenditure with all fields specified (for database reconstruction).
    pub fn from_parts(
        id: ExpenditureId,
        description: String,
        amount: f64,
        date: DateTime<Utc>,
        category_id: Option<CategoryId>,
    ) -> Self {
        Self {
            id,
            description,
            amount,
            date,
            category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_expenditure_creation() {
        let exp = Expenditure::new("Coffee".to_string(), 3.5, new_year(), None).unwrap();
        assert_eq!(exp.description, "Coffee");
        assert_eq!(exp.amount, 3.5);
        assert_eq!(exp.date, new_year());
        assert!(exp.category_id.is_none());
    }

    #[test]
    fn test_empty_description_fails() {
        let result = Expenditure::new(String::new(), 3.5, new_year(), None);
        assert_eq!(result, Err(DomainError::DescriptionEmpty));
    }

    #[test]
    fn test_non_positive_amount_fails() {
        for amount in [0.0, -5.0, f64::NAN] {
            let result = Expenditure::new("Coffee".to_string(), amount, new_year(), None);
            assert_eq!(result, Err(DomainError::InvalidAmount), "amount {amount}");
        }
    }

    #[test]
    fn test_future_date_fails() {
        let tomorrow = Utc::now() + Duration::days(1);
        let result = Expenditure::new("Coffee".to_string(), 3.5, tomorrow, None);
        assert_eq!(result, Err(DomainError::FutureDate));
    }

    #[test]
    fn test_present_date_is_accepted() {
        let result = Expenditure::new("Coffee".to_string(), 3.5, Utc::now(), None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_nil_category_fails() {
        let nil = CategoryId::from_uuid(Uuid::nil());
        let result = Expenditure::new("Coffee".to_string(), 3.5, new_year(), Some(nil));
        assert_eq!(result, Err(DomainError::CategoryEmpty));
    }

    #[test]
    fn test_description_checked_before_amount() {
        let result = Expenditure::new(String::new(), -1.0, new_year(), None);
        assert_eq!(result, Err(DomainError::DescriptionEmpty));
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: std::collections::HashSet<_> = (0..100)
            .map(|_| {
                Expenditure::new("Coffee".to_string(), 1.0, new_year(), None)
                    .unwrap()
                    .id
            })
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_with_id_keeps_identifier() {
        let id = ExpenditureId::new();
        let exp = Expenditure::with_id(id, "Rent".to_string(), 900.0, new_year(), None).unwrap();
        assert_eq!(exp.id, id);
    }

    #[test]
    fn test_date_is_truncated_to_microseconds() {
        let date = new_year() + Duration::nanoseconds(123_456_789);
        let exp = Expenditure::new("Coffee".to_string(), 3.5, date, None).unwrap();

        assert_eq!(exp.date, new_year() + Duration::microseconds(123_456));
        let json = serde_json::to_value(&exp).unwrap();
        assert_eq!(json["date"], "2024-01-01T00:00:00.123456Z");
    }

    #[test]
    fn test_json_shape() {
        let category = CategoryId::new();
        let exp = Expenditure::new("Coffee".to_string(), 3.5, new_year(), Some(category)).unwrap();
        let json = serde_json::to_value(&exp).unwrap();
        assert_eq!(json["description"], "Coffee");
        assert_eq!(json["amount"], 3.5);
        assert_eq!(json["date"], "2024-01-01T00:00:00Z");
        assert_eq!(json["categoryId"], category.to_string());

        let uncategorized = Expenditure::new("Tea".to_string(), 2.0, new_year(), None).unwrap();
        let json = serde_json::to_value(&uncategorized).unwrap();
        assert!(json.get("categoryId").is_none());
    }
}
