//! Domain models for the expense tracker.

pub mod category;
pub mod expenditure;

pub use category::{Category, CategoryId};
pub use expenditure::{Expenditure, ExpenditureId};
