//! Expense summary
//!
//! Derives spending totals from a budget and a list of items. Nothing here
//! is stored; the summary is recomputed whenever it is shown.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Category, Money, ShoppingItem};

/// Progress (percent of budget) above which spending is flagged by default
pub const DEFAULT_WARNING_THRESHOLD: f64 = 80.0;

/// How spending compares to the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    OverBudget,
}

impl BudgetStatus {
    /// Classify a progress percentage against a warning threshold
    pub fn classify(progress_percent: f64, warning_threshold: f64) -> Self {
        if progress_percent > 100.0 {
            BudgetStatus::OverBudget
        } else if progress_percent > warning_threshold {
            BudgetStatus::Warning
        } else {
            BudgetStatus::OnTrack
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetStatus::OnTrack => "On track",
            BudgetStatus::Warning => "Nearing budget",
            BudgetStatus::OverBudget => "Over budget",
        }
    }
}

/// Spending in one category with its share of the total
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpend {
    pub category: Category,
    pub amount: Money,
    /// Percent of total expenses (0 when there are no expenses)
    pub share_percent: f64,
}

/// Aggregate view of a user's spending
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub budget: Money,
    pub total_expenses: Money,
    /// Spend per category; every category is present, zero if unused
    pub category_expenses: BTreeMap<Category, Money>,
    /// Budget minus total expenses; negative when over budget
    pub remaining_budget: Money,
    pub completed_expenses: Money,
    pub item_count: usize,
    pub completed_count: usize,
    pub progress_percent: f64,
    pub status: BudgetStatus,
}

impl ExpenseSummary {
    /// Summarize with the default warning threshold
    pub fn compute(budget: Money, items: &[ShoppingItem]) -> Self {
        Self::compute_with_threshold(budget, items, DEFAULT_WARNING_THRESHOLD)
    }

    pub fn compute_with_threshold(
        budget: Money,
        items: &[ShoppingItem],
        warning_threshold: f64,
    ) -> Self {
        let mut category_expenses: BTreeMap<Category, Money> =
            Category::ALL.iter().map(|c| (*c, Money::zero())).collect();
        let mut total_expenses = Money::zero();
        let mut completed_expenses = Money::zero();
        let mut completed_count = 0;

        for item in items {
            total_expenses += item.amount;
            *category_expenses.entry(item.category).or_default() += item.amount;
            if item.completed {
                completed_expenses += item.amount;
                completed_count += 1;
            }
        }

        let progress_percent = percent(total_expenses, budget);

        Self {
            budget,
            total_expenses,
            category_expenses,
            remaining_budget: budget - total_expenses,
            completed_expenses,
            item_count: items.len(),
            completed_count,
            progress_percent,
            status: BudgetStatus::classify(progress_percent, warning_threshold),
        }
    }

    /// Spend on items not yet marked complete
    pub fn pending_expenses(&self) -> Money {
        self.total_expenses - self.completed_expenses
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining_budget.is_negative()
    }

    pub fn category_total(&self, category: Category) -> Money {
        self.category_expenses
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    /// Categories with spending, largest first
    pub fn ranked_categories(&self) -> Vec<CategorySpend> {
        let mut ranked: Vec<_> = self
            .category_expenses
            .iter()
            .filter(|(_, amount)| amount.is_positive())
            .map(|(category, amount)| CategorySpend {
                category: *category,
                amount: *amount,
                share_percent: percent(*amount, self.total_expenses),
            })
            .collect();
        // Stable sort keeps category order for ties
        ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
        ranked
    }
}

/// `part / whole * 100`, zero when `whole` is not positive
fn percent(part: Money, whole: Money) -> f64 {
    if whole.is_positive() {
        part.cents() as f64 * 100.0 / whole.cents() as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemId, ItemInput, ShoppingList};

    fn add(list: &mut ShoppingList, name: &str, category: Category, cents: i64) {
        list.add(ItemInput::new(name, category, Money::from_cents(cents)).unwrap());
    }

    #[test]
    fn test_empty_list() {
        let summary = ExpenseSummary::compute(Money::from_dollars(500), &[]);

        assert_eq!(summary.total_expenses, Money::zero());
        assert_eq!(summary.remaining_budget, Money::from_dollars(500));
        assert_eq!(summary.category_expenses.len(), Category::ALL.len());
        assert!(summary.ranked_categories().is_empty());
        assert_eq!(summary.progress_percent, 0.0);
        assert_eq!(summary.status, BudgetStatus::OnTrack);
    }

    #[test]
    fn test_remaining_after_add() {
        let mut list = ShoppingList::new();
        add(&mut list, "Groceries run", Category::Groceries, 4000);
        add(&mut list, "Charger", Category::Electronics, 5000);

        let summary = ExpenseSummary::compute(Money::from_dollars(100), list.as_slice());
        assert_eq!(summary.remaining_budget, Money::from_dollars(10));
    }

    #[test]
    fn test_totals_match_items() {
        let mut list = ShoppingList::new();
        add(&mut list, "Milk", Category::Groceries, 299);
        add(&mut list, "Eggs", Category::Groceries, 450);
        add(&mut list, "Movie", Category::Entertainment, 1200);

        let summary = ExpenseSummary::compute(Money::from_dollars(50), list.as_slice());

        assert_eq!(summary.total_expenses, list.total());
        assert_eq!(summary.category_total(Category::Groceries).cents(), 749);
        assert_eq!(summary.category_total(Category::Entertainment).cents(), 1200);
        assert_eq!(summary.category_total(Category::Health), Money::zero());

        let by_category: Money = summary.category_expenses.values().sum();
        assert_eq!(by_category, summary.total_expenses);
    }

    #[test]
    fn test_ranked_categories() {
        let mut list = ShoppingList::new();
        add(&mut list, "Milk", Category::Groceries, 250);
        add(&mut list, "Movie", Category::Entertainment, 750);

        let ranked = ExpenseSummary::compute(Money::from_dollars(100), list.as_slice())
            .ranked_categories();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].category, Category::Entertainment);
        assert_eq!(ranked[0].share_percent, 75.0);
        assert_eq!(ranked[1].category, Category::Groceries);
        assert_eq!(ranked[1].share_percent, 25.0);

        let value = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(value["sharePercent"], 75.0);
        assert!(value.get("share_percent").is_none());
    }

    #[test]
    fn test_over_budget() {
        let mut list = ShoppingList::new();
        add(&mut list, "Laptop", Category::Electronics, 120000);

        let summary = ExpenseSummary::compute(Money::from_dollars(500), list.as_slice());

        assert!(summary.is_over_budget());
        assert_eq!(summary.remaining_budget, Money::from_dollars(-700));
        assert_eq!(summary.status, BudgetStatus::OverBudget);
        assert_eq!(summary.progress_percent, 240.0);
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(BudgetStatus::classify(80.0, 80.0), BudgetStatus::OnTrack);
        assert_eq!(BudgetStatus::classify(80.5, 80.0), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::classify(100.0, 80.0), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::classify(100.1, 80.0), BudgetStatus::OverBudget);
        assert_eq!(BudgetStatus::classify(60.0, 50.0), BudgetStatus::Warning);
    }

    #[test]
    fn test_zero_budget_has_zero_progress() {
        let mut list = ShoppingList::new();
        add(&mut list, "Gum", Category::Other, 100);

        let summary = ExpenseSummary::compute(Money::zero(), list.as_slice());
        assert_eq!(summary.progress_percent, 0.0);
        assert_eq!(summary.remaining_budget.cents(), -100);
        assert!(summary.is_over_budget());
    }

    #[test]
    fn test_completed_split() {
        let mut list = ShoppingList::new();
        add(&mut list, "Milk", Category::Groceries, 300);
        add(&mut list, "Socks", Category::Clothing, 700);
        let id = list.as_slice()[1].id.clone();
        list.toggle(&id);

        let summary = ExpenseSummary::compute(Money::from_dollars(100), list.as_slice());
        assert_eq!(summary.completed_count, 1);
        assert_eq!(summary.completed_expenses.cents(), 700);
        assert_eq!(summary.pending_expenses().cents(), 300);
        assert_eq!(summary.total_expenses.cents(), 1000);
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        let huge = Money::from_cents(i64::MAX / 2 + 1);
        let items = vec![
            ShoppingItem::new("A", Category::Other, huge),
            ShoppingItem::new("B", Category::Other, huge),
        ];

        let summary = ExpenseSummary::compute(Money::from_dollars(100), &items);
        assert_eq!(summary.total_expenses.cents(), i64::MAX);
        assert_eq!(summary.category_total(Category::Other).cents(), i64::MAX);
        assert!(summary.is_over_budget());
        assert_eq!(summary.status, BudgetStatus::OverBudget);
    }

    #[test]
    fn test_edit_moves_spend_between_categories() {
        let mut list = ShoppingList::new();
        add(&mut list, "Cable", Category::Groceries, 1500);
        add(&mut list, "Bread", Category::Groceries, 300);
        let id = list.as_slice()[0].id.clone();

        list.edit(
            &id,
            ItemInput::new("Cable", Category::Electronics, Money::from_cents(1500)).unwrap(),
        );

        let summary = ExpenseSummary::compute(Money::from_dollars(100), list.as_slice());
        assert_eq!(summary.category_total(Category::Groceries).cents(), 300);
        assert_eq!(summary.category_total(Category::Electronics).cents(), 1500);
        assert_eq!(summary.total_expenses.cents(), 1800);
    }

    /// Small deterministic generator so every run sees the same sequence
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self, bound: usize) -> usize {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((self.0 >> 33) % bound as u64) as usize
        }
    }

    fn assert_consistent(list: &ShoppingList, budget: Money) {
        let summary = ExpenseSummary::compute(budget, list.as_slice());

        let expected_total: Money = list.iter().map(|i| i.amount).sum();
        assert_eq!(summary.total_expenses, expected_total);
        assert_eq!(summary.remaining_budget, budget - expected_total);
        assert_eq!(summary.item_count, list.len());
        assert_eq!(summary.completed_count, list.completed_count());

        for category in Category::ALL {
            let expected: Money = list
                .iter()
                .filter(|i| i.category == category)
                .map(|i| i.amount)
                .sum();
            assert_eq!(summary.category_total(category), expected, "{}", category);
        }
    }

    #[test]
    fn test_totals_hold_across_mutation_sequences() {
        let budget = Money::from_dollars(250);

        for seed in 1..=20u64 {
            let mut rng = Lcg(seed);
            let mut list = ShoppingList::new();

            for step in 0..200 {
                let category = Category::ALL[rng.next(Category::ALL.len())];
                let amount = Money::from_cents(rng.next(10_000) as i64);
                let target: Option<ItemId> = if list.is_empty() {
                    None
                } else {
                    Some(list.as_slice()[rng.next(list.len())].id.clone())
                };

                match (rng.next(5), target) {
                    (0 | 1, _) | (_, None) => {
                        let name = format!("item {}", step);
                        list.add(ItemInput::new(&name, category, amount).unwrap());
                    }
                    (2, Some(id)) => {
                        let name = list.get(&id).unwrap().name.clone();
                        list.edit(&id, ItemInput::new(&name, category, amount).unwrap());
                    }
                    (3, Some(id)) => {
                        list.toggle(&id);
                    }
                    (_, Some(id)) => {
                        list.remove(&id);
                    }
                }

                assert_consistent(&list, budget);
            }

            list.remove_completed();
            assert_consistent(&list, budget);
        }
    }

    #[test]
    fn test_idempotent() {
        let mut list = ShoppingList::new();
        add(&mut list, "Milk", Category::Groceries, 300);

        let a = ExpenseSummary::compute(Money::from_dollars(10), list.as_slice());
        let b = ExpenseSummary::compute(Money::from_dollars(10), list.as_slice());
        assert_eq!(a, b);
    }
}
