//! # Expense Types
//!
//! Domain types and port traits for the expense tracker.
//! This crate has no IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal architecture:
//! - `domain/` - Validated domain types (Expenditure, Category)
//! - `ports/` - Repository traits that storage adapters implement
//! - `dto/` - Request bodies for the HTTP boundary
//! - `error/` - Domain, repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

pub use domain::{Category, CategoryId, Expenditure, ExpenditureId};
pub use dto::*;
pub use error::{AppError, DomainError, RepoError};
pub use ports::{CategoryRepository, ExpenditureRepository};
