//! Per-user budget persistence
//!
//! Each user's budget and shopping list live in one slot, keyed by
//! `basket_<user id>`, as a JSON record:
//!
//! ```json
//! { "budget": 500, "items": [ ... ], "lastUpdated": "2025-01-01T00:00:00Z" }
//! ```
//!
//! Loading never fails on bad data: an empty slot or a record that does not
//! parse yields the default state. Only storage I/O errors are reported.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BasketResult;
use crate::models::{BudgetState, Money, ShoppingList, UserId, DEFAULT_BUDGET};

use super::slots::SlotStore;

/// Prefix of every user slot key
pub const KEY_PREFIX: &str = "basket_";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordOut<'a> {
    budget: Money,
    items: &'a ShoppingList,
    last_updated: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordIn {
    #[serde(default)]
    budget: Option<Money>,
    #[serde(default)]
    items: Option<ShoppingList>,
    #[serde(default)]
    last_updated: Option<DateTime<Utc>>,
}

/// Repository for per-user budget state on top of a slot store
pub struct UserDataRepository<S: SlotStore> {
    slots: S,
}

impl<S: SlotStore> UserDataRepository<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Slot key for a user
    pub fn storage_key(user: &UserId) -> String {
        format!("{}{}", KEY_PREFIX, user)
    }

    /// Load a user's state, falling back to defaults for absent or corrupt data
    pub fn load(&self, user: &UserId) -> BasketResult<BudgetState> {
        Ok(self
            .read_record(user)?
            .map(|record| {
                BudgetState::new(
                    record.budget.unwrap_or(DEFAULT_BUDGET),
                    record.items.unwrap_or_default(),
                )
            })
            .unwrap_or_default())
    }

    /// Persist a user's state, stamping it with the current time
    pub fn save(&self, user: &UserId, state: &BudgetState) -> BasketResult<()> {
        let record = RecordOut {
            budget: state.budget,
            items: &state.items,
            last_updated: Utc::now(),
        };
        let json = serde_json::to_string(&record)?;
        self.slots.set(&Self::storage_key(user), &json)
    }

    /// When the stored record was last written, if there is a readable one
    pub fn last_updated(&self, user: &UserId) -> BasketResult<Option<DateTime<Utc>>> {
        Ok(self.read_record(user)?.and_then(|r| r.last_updated))
    }

    /// Drop everything stored for a user; returns whether a slot existed
    pub fn clear(&self, user: &UserId) -> BasketResult<bool> {
        self.slots.remove(&Self::storage_key(user))
    }

    fn read_record(&self, user: &UserId) -> BasketResult<Option<RecordIn>> {
        let raw = match self.slots.get(&Self::storage_key(user))? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        Ok(serde_json::from_str(&raw).ok())
    }
}
