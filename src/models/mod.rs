//! Core data models for Basket
//!
//! Items, categories, money, and the per-user budget state that gets
//! persisted.

pub mod category;
pub mod ids;
pub mod item;
pub mod list;
pub mod money;
pub mod state;
pub mod user;

pub use category::{Category, CategoryParseError};
pub use ids::ItemId;
pub use item::{ItemInput, ItemValidationError, ShoppingItem};
pub use list::ShoppingList;
pub use money::{Money, MoneyParseError, MAX_AMOUNT};
pub use state::{BudgetState, DEFAULT_BUDGET};
pub use user::UserId;
