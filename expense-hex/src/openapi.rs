//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use expense_types::domain::{Category, CategoryId, Expenditure, ExpenditureId};
use expense_types::dto::{ErrorResponse, ExpenditureRequest};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Record a new expenditure
#[utoipa::path(
    post,
    path = "/expenditures",
    tag = "expenditures",
    request_body = ExpenditureRequest,
    responses(
        (status = 201, description = "Expenditure created", body = Expenditure),
        (status = 400, description = "Invalid body or failed validation", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_expenditure() {}

/// List all expenditures
#[utoipa::path(
    get,
    path = "/expenditures",
    tag = "expenditures",
    responses(
        (status = 200, description = "All expenditures, unordered", body = Vec<Expenditure>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_expenditures() {}

/// Get an expenditure by ID
#[utoipa::path(
    get,
    path = "/expenditures/{id}",
    tag = "expenditures",
    params(("id" = ExpenditureId, Path, description = "Expenditure ID")),
    responses(
        (status = 200, description = "Expenditure found", body = Expenditure),
        (status = 404, description = "Expenditure not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn get_expenditure() {}

/// Replace an expenditure
#[utoipa::path(
    put,
    path = "/expenditures/{id}",
    tag = "expenditures",
    params(("id" = ExpenditureId, Path, description = "Expenditure ID")),
    request_body = ExpenditureRequest,
    responses(
        (status = 200, description = "Expenditure replaced", body = Expenditure),
        (status = 400, description = "Invalid body or failed validation", body = ErrorResponse),
        (status = 404, description = "Expenditure not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn update_expenditure() {}

/// Delete an expenditure
#[utoipa::path(
    delete,
    path = "/expenditures/{id}",
    tag = "expenditures",
    params(("id" = ExpenditureId, Path, description = "Expenditure ID")),
    responses(
        (status = 204, description = "Expenditure deleted"),
        (status = 404, description = "Expenditure not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn delete_expenditure() {}

/// List the category palette
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "All categories", body = Vec<Category>)
    )
)]
async fn list_categories() {}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = CategoryId, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
async fn get_category() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Expense Tracker API",
        version = "0.1.0",
        description = "Record, list, update and delete expenditures."
    ),
    paths(
        health,
        create_expenditure,
        list_expenditures,
        get_expenditure,
        update_expenditure,
        delete_expenditure,
        list_categories,
        get_category,
    ),
    components(schemas(
        Expenditure,
        ExpenditureId,
        ExpenditureRequest,
        Category,
        CategoryId,
        ErrorResponse,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "expenditures", description = "Expenditure records"),
        (name = "categories", description = "Read-only category palette")
    )
)]
pub struct ApiDoc;
