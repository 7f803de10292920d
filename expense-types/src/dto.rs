//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::CategoryId;

/// Request body for creating or replacing an expenditure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenditureRequest {
    /// What the money was spent on
    #[schema(example = "Coffee")]
    pub description: String,
    /// Amount spent, must be positive
    #[schema(example = 3.5)]
    pub amount: f64,
    /// When the expenditure occurred (RFC 3339), not in the future
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub date: DateTime<Utc>,
    /// Optional reference to an existing category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

/// Error body returned for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "invalid expenditure amount")]
    pub error: String,
    #[schema(example = 400)]
    pub code: u16,
}
