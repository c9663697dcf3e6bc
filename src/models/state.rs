//! Per-user budget state: the budget ceiling plus the shopping list

use super::list::ShoppingList;
use super::money::Money;

/// Budget used when a user has no stored data
pub const DEFAULT_BUDGET: Money = Money::from_dollars(500);

/// Everything persisted for one user
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetState {
    pub budget: Money,
    pub items: ShoppingList,
}

impl BudgetState {
    pub fn new(budget: Money, items: ShoppingList) -> Self {
        Self { budget, items }
    }
}

impl Default for BudgetState {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            items: ShoppingList::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = BudgetState::default();
        assert_eq!(state.budget.cents(), 50000);
        assert!(state.items.is_empty());
    }
}
