//! Service layer for Basket
//!
//! Business logic on top of the storage layer: validation, persistence and
//! audit logging for each user-visible operation.

pub mod shopping_list;

pub use shopping_list::ShoppingListService;
