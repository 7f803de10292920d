//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use expense_types::{
    AppError, CategoryId, CategoryRepository, ExpenditureId, ExpenditureRepository,
    ExpenditureRequest,
};

use crate::ExpenseService;

/// Application state shared across handlers.
pub struct AppState<E: ExpenditureRepository, C: CategoryRepository> {
    pub service: ExpenseService<E, C>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected request");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        error_body(status, message)
    }
}

fn error_body(status: StatusCode, message: String) -> Response {
    let body = serde_json::json!({
        "error": message,
        "code": status.as_u16()
    });

    (status, Json(body)).into_response()
}

/// Decodes a JSON body; any syntax, type or missing-field problem is a 400.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Failed to decode request body");
        AppError::BadRequest("Invalid request body".into())
    })
}

/// A path id that is not a UUID cannot name a stored record.
fn parse_expenditure_id(id: &str) -> Result<ExpenditureId, AppError> {
    id.parse()
        .map_err(|_| AppError::NotFound("expenditure not found".into()))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Fallback for unknown paths.
pub async fn not_found() -> Response {
    error_body(StatusCode::NOT_FOUND, "Not found".into())
}

/// Fallback for known paths hit with an unsupported verb.
pub async fn method_not_allowed() -> Response {
    error_body(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".into())
}

// ─────────────────────────────────────────────────────────────────────────────
// Expenditures
// ─────────────────────────────────────────────────────────────────────────────

/// Create an expenditure.
#[tracing::instrument(skip(state, body))]
pub async fn create_expenditure<E: ExpenditureRepository, C: CategoryRepository>(
    State(state): State<Arc<AppState<E, C>>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req: ExpenditureRequest = decode_body(&body)?;
    tracing::debug!(
        description = %req.description,
        amount = req.amount,
        date = %req.date,
        "Decoded expenditure request"
    );

    let expenditure = state.service.create_expenditure(req).await?;

    tracing::info!(id = %expenditure.id, "Created expenditure");
    Ok((StatusCode::CREATED, Json(expenditure)))
}

/// List all expenditures.
#[tracing::instrument(skip(state))]
pub async fn list_expenditures<E: ExpenditureRepository, C: CategoryRepository>(
    State(state): State<Arc<AppState<E, C>>>,
) -> Result<impl IntoResponse, ApiError> {
    let expenditures = state.service.list_expenditures().await?;
    tracing::debug!(count = expenditures.len(), "Listed expenditures");
    Ok(Json(expenditures))
}

/// Get an expenditure by ID.
#[tracing::instrument(skip(state), fields(expenditure_id = %id))]
pub async fn get_expenditure<E: ExpenditureRepository, C: CategoryRepository>(
    State(state): State<Arc<AppState<E, C>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_expenditure_id(&id)?;
    let expenditure = state.service.get_expenditure(id).await?;
    tracing::debug!("Found expenditure");
    Ok(Json(expenditure))
}

/// Replace an expenditure.
#[tracing::instrument(skip(state, body), fields(expenditure_id = %id))]
pub async fn update_expenditure<E: ExpenditureRepository, C: CategoryRepository>(
    State(state): State<Arc<AppState<E, C>>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_expenditure_id(&id)?;

    // A missing record is reported before a malformed body.
    state.service.get_expenditure(id).await?;

    let req: ExpenditureRequest = decode_body(&body)?;
    let expenditure = state.service.update_expenditure(id, req).await?;

    tracing::info!("Updated expenditure");
    Ok(Json(expenditure))
}

/// Delete an expenditure.
#[tracing::instrument(skip(state), fields(expenditure_id = %id))]
pub async fn delete_expenditure<E: ExpenditureRepository, C: CategoryRepository>(
    State(state): State<Arc<AppState<E, C>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_expenditure_id(&id)?;
    state.service.delete_expenditure(id).await?;

    tracing::info!("Deleted expenditure");
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Categories
// ─────────────────────────────────────────────────────────────────────────────

/// List all categories.
#[tracing::instrument(skip(state))]
pub async fn list_categories<E: ExpenditureRepository, C: CategoryRepository>(
    State(state): State<Arc<AppState<E, C>>>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state.service.list_categories().await?;
    Ok(Json(categories))
}

/// Get a category by ID.
#[tracing::instrument(skip(state), fields(category_id = %id))]
pub async fn get_category<E: ExpenditureRepository, C: CategoryRepository>(
    State(state): State<Arc<AppState<E, C>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CategoryId = id
        .parse()
        .map_err(|_| AppError::NotFound("category not found".into()))?;

    let category = state.service.get_category(id).await?;
    Ok(Json(category))
}
