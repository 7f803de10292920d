//! Category domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier for a Category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Creates a new random CategoryId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Derives a stable CategoryId from a category name.
    pub fn from_name(name: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()))
    }

    /// Creates a CategoryId from an existing UUID.
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

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CategoryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A named, colored grouping label for expenditures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: CategoryId,
    #[schema(example = "Food & Dining")]
    pub name: String,
    /// Display hint, not validated beyond being non-empty
    #[schema(example = "#FF6B6B")]
    pub color: String,
}

impl Category {
    /// Creates a new category with a random identifier.
    pub fn new(name: String, color: String) -> Result<Self, DomainError> {
        Self::validate(&name, &color)?;
        Ok(Self {
            id: CategoryId::new(),
            name,
            color,
        })
    }

    /// Creates a category whose identifier is derived from its name.
    pub fn seeded(name: &str, color: &str) -> Result<Self, DomainError> {
        Self::validate(name, color)?;
        Ok(Self {
            id: CategoryId::from_name(name),
            name: name.to_string(),
            color: color.to_string(),
        })
    }

    /// Replaces name and color after validating both.
    pub fn update(&mut self, name: String, color: String) -> Result<(), DomainError> {
        Self::validate(&name, &color)?;
        self.name = name;
        self.color = color;
        Ok(())
    }

    fn validate(name: &str, color: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::CategoryNameEmpty);
        }
        if color.is_empty() {
            return Err(DomainError::CategoryColorEmpty);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let category = Category::new("Travel".to_string(), "#00A8E8".to_string()).unwrap();
        assert_eq!(category.name, "Travel");
        assert_eq!(category.color, "#00A8E8");
    }

    #[test]
    fn test_empty_name_fails() {
        let result = Category::new(String::new(), "#00A8E8".to_string());
        assert_eq!(result, Err(DomainError::CategoryNameEmpty));
    }

    #[test]
    fn test_empty_color_fails() {
        let result = Category::new("Travel".to_string(), String::new());
        assert_eq!(result, Err(DomainError::CategoryColorEmpty));
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut category = Category::new("Travel".to_string(), "#00A8E8".to_string()).unwrap();
        let id = category.id;
        category
            .update("Holidays".to_string(), "#123456".to_string())
            .unwrap();
        assert_eq!(category.id, id);
        assert_eq!(category.name, "Holidays");
        assert_eq!(category.color, "#123456");
    }

    #[test]
    fn test_invalid_update_leaves_category_untouched() {
        let mut category = Category::new("Travel".to_string(), "#00A8E8".to_string()).unwrap();
        let result = category.update("Holidays".to_string(), String::new());
        assert_eq!(result, Err(DomainError::CategoryColorEmpty));
        assert_eq!(category.name, "Travel");
    }

    #[test]
    fn test_seeded_ids_are_stable() {
        let a = Category::seeded("Housing", "#1A535C").unwrap();
        let b = Category::seeded("Housing", "#000000").unwrap();
        let c = Category::seeded("Utilities", "#FFE66D").unwrap();
        assert_eq!(a.id, b.id);
        assert_ne!(a.id, c.id);
    }
}
