//! Basket - shopping list with a spending budget
//!
//! This library provides the core functionality for the Basket CLI. Each user
//! has a budget and a list of categorized items; spending is summarized
//! against the budget on demand.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, items, the list)
//! - `storage`: Per-user JSON slots with atomic writes
//! - `reports`: Expense summary derived from a user's list
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use basket::config::paths::BasketPaths;
//! use basket::models::UserId;
//! use basket::services::ShoppingListService;
//! use basket::storage::Storage;
//!
//! let storage = Storage::new(BasketPaths::new()?)?;
//! let user = UserId::parse("alice")?;
//! let summary = ShoppingListService::new(&storage, &user).summary(80.0)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BasketError, BasketResult};
