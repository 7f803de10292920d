//! # Expense Hex
//!
//! Application service layer and HTTP adapter for the expense tracker.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validation and orchestration)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served at `/api-docs/openapi.json`
//!
//! The service is generic over the `ExpenditureRepository` and
//! `CategoryRepository` ports, so the storage backend is injected once.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::ExpenseService;
