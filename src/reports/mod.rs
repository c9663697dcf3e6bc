//! Reports derived from stored data

pub mod summary;

pub use summary::{BudgetStatus, CategorySpend, ExpenseSummary, DEFAULT_WARNING_THRESHOLD};
