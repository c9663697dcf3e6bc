//! Shopping list service
//!
//! Business logic for one user's budget and list. Every mutation loads the
//! stored snapshot, applies the change, saves, and writes an audit entry.

use crate::audit::EntityType;
use crate::error::{BasketError, BasketResult};
use crate::models::{BudgetState, ItemInput, Money, ShoppingItem, UserId, MAX_AMOUNT};
use crate::reports::ExpenseSummary;
use crate::storage::Storage;

/// Audit entity id used for budget changes
const BUDGET_ENTITY_ID: &str = "budget";

/// Service for a single user's shopping list
pub struct ShoppingListService<'a> {
    storage: &'a Storage,
    user: &'a UserId,
}

impl<'a> ShoppingListService<'a> {
    pub fn new(storage: &'a Storage, user: &'a UserId) -> Self {
        Self { storage, user }
    }

    pub fn user(&self) -> &UserId {
        self.user
    }

    /// Current budget and items
    pub fn state(&self) -> BasketResult<BudgetState> {
        self.storage.users.load(self.user)
    }

    /// Replace the budget
    pub fn set_budget(&self, budget: Money) -> BasketResult<BudgetState> {
        if budget.is_negative() {
            return Err(BasketError::Validation(format!(
                "Budget cannot be negative: {}",
                budget
            )));
        }
        if !budget.is_within_limit() {
            return Err(BasketError::Validation(format!(
                "Budget too large: {} (max {})",
                budget, MAX_AMOUNT
            )));
        }

        let mut state = self.state()?;
        let before = state.budget;
        state.budget = budget;
        self.save(&state)?;

        self.storage.log_update(
            self.user,
            EntityType::Budget,
            BUDGET_ENTITY_ID,
            None,
            &before,
            &budget,
        )?;

        Ok(state)
    }

    /// Append a new item
    pub fn add_item(&self, input: ItemInput) -> BasketResult<ShoppingItem> {
        let mut state = self.state()?;
        let item = state.items.add(input).clone();
        self.save(&state)?;

        self.storage.log_create(
            self.user,
            EntityType::Item,
            item.id.to_string(),
            Some(item.name.clone()),
            &item,
        )?;

        Ok(item)
    }

    /// Resolve an id, id prefix, or name to an item
    pub fn find_item(&self, identifier: &str) -> BasketResult<ShoppingItem> {
        let state = self.state()?;
        state.items.find(identifier).cloned()
    }

    /// Replace name, category and amount of an item
    pub fn edit_item(&self, identifier: &str, input: ItemInput) -> BasketResult<ShoppingItem> {
        let mut state = self.state()?;
        let id = state.items.find(identifier)?.id.clone();

        let before = state
            .items
            .edit(&id, input)
            .ok_or_else(|| BasketError::item_not_found(identifier))?;
        let after = state
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| BasketError::item_not_found(identifier))?;
        self.save(&state)?;

        self.storage.log_update(
            self.user,
            EntityType::Item,
            id.to_string(),
            Some(after.name.clone()),
            &before,
            &after,
        )?;

        Ok(after)
    }

    /// Flip an item's completed flag
    pub fn toggle_item(&self, identifier: &str) -> BasketResult<ShoppingItem> {
        let mut state = self.state()?;
        let before = state.items.find(identifier)?.clone();

        state.items.toggle(&before.id);
        let after = state
            .items
            .get(&before.id)
            .cloned()
            .ok_or_else(|| BasketError::item_not_found(identifier))?;
        self.save(&state)?;

        self.storage.log_update(
            self.user,
            EntityType::Item,
            after.id.to_string(),
            Some(after.name.clone()),
            &before,
            &after,
        )?;

        Ok(after)
    }

    /// Delete an item
    pub fn delete_item(&self, identifier: &str) -> BasketResult<ShoppingItem> {
        let mut state = self.state()?;
        let id = state.items.find(identifier)?.id.clone();

        let removed = state
            .items
            .remove(&id)
            .ok_or_else(|| BasketError::item_not_found(identifier))?;
        self.save(&state)?;

        self.storage.log_delete(
            self.user,
            EntityType::Item,
            removed.id.to_string(),
            Some(removed.name.clone()),
            &removed,
        )?;

        Ok(removed)
    }

    /// Delete every completed item
    pub fn clear_completed(&self) -> BasketResult<Vec<ShoppingItem>> {
        let mut state = self.state()?;
        let removed = state.items.remove_completed();
        if removed.is_empty() {
            return Ok(removed);
        }
        self.save(&state)?;

        self.storage.log_deletes(
            self.user,
            EntityType::Item,
            removed
                .iter()
                .map(|item| (item.id.to_string(), Some(item.name.clone()), item)),
        )?;

        Ok(removed)
    }

    /// Spending summary using the given warning threshold
    pub fn summary(&self, warning_threshold: f64) -> BasketResult<ExpenseSummary> {
        let state = self.state()?;
        Ok(ExpenseSummary::compute_with_threshold(
            state.budget,
            state.items.as_slice(),
            warning_threshold,
        ))
    }

    fn save(&self, state: &BudgetState) -> BasketResult<()> {
        self.storage.users.save(self.user, state)
    }
}
