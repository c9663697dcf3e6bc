//! Shopping item model
//!
//! A single line on the shopping list, plus the validated input used to
//! create or edit one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ItemId;
use super::money::{Money, MAX_AMOUNT};

/// Longest accepted item name, in characters
pub const MAX_NAME_LEN: usize = 100;

/// A line item on the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub amount: Money,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl ShoppingItem {
    /// Create a new, not yet completed item with a fresh id
    pub fn new(name: impl Into<String>, category: Category, amount: Money) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            category,
            amount,
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Build an item from validated input
    pub fn from_input(input: ItemInput) -> Self {
        Self::new(input.name, input.category, input.amount)
    }

    /// Replace the user-editable fields, keeping id, status and creation time
    pub fn apply(&mut self, input: ItemInput) {
        self.name = input.name;
        self.category = input.category;
        self.amount = input.amount;
    }

    /// Check if this item's name matches (case-insensitive, trimmed)
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.category, self.amount)
    }
}

/// Name, category and amount as submitted by the user, already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInput {
    name: String,
    category: Category,
    amount: Money,
}

impl ItemInput {
    /// Validate a submission; the name is trimmed
    pub fn new(
        name: &str,
        category: Category,
        amount: Money,
    ) -> Result<Self, ItemValidationError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(ItemValidationError::EmptyName);
        }

        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ItemValidationError::NameTooLong(len));
        }

        if amount.is_negative() {
            return Err(ItemValidationError::NegativeAmount(amount));
        }

        if !amount.is_within_limit() {
            return Err(ItemValidationError::AmountTooLarge(amount));
        }

        Ok(Self {
            name: name.to_string(),
            category,
            amount,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

/// Validation errors for item submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Item name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Item name too long ({} characters, max {})",
                len, MAX_NAME_LEN
            ),
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative: {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount too large: {} (max {})", amount, MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for ItemValidationError {}
