//! Port traits (interfaces for adapters).
//!
//! These are the contracts that storage adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod repository;

pub use repository::{CategoryRepository, ExpenditureRepository};
