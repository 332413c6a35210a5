//! The budget ledger
//!
//! Holds the income and expense entries and the aggregates derived from them.
//! Aggregates are never updated as a side effect of adding or deleting an
//! entry; they are rebuilt from scratch by [`Ledger::recompute_totals`] and
//! [`Ledger::recompute_percentages`], in that order. The coordinator's
//! `synchronize` is the one place that sequences them.

use serde::Serialize;
use tracing::trace;

use crate::models::{BudgetSummary, Category, Entry, EntryId, Expense, Income, Money};

/// Summed amounts per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub expense: Money,
    pub income: Money,
}

/// In-memory store of budget entries and their aggregates
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Ledger {
    expenses: Vec<Expense>,
    incomes: Vec<Income>,
    /// Next id to hand out per category; only ever grows
    next_expense_id: EntryId,
    next_income_id: EntryId,
    totals: Totals,
    net_budget: Money,
    spend_ratio: Option<u32>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry to `category` and return a copy of it
    ///
    /// The amount is taken as given; callers validate input first.
    pub fn add_entry(
        &mut self,
        category: Category,
        description: impl Into<String>,
        amount: Money,
    ) -> Entry {
        let id = self.take_next_id(category);

        match category {
            Category::Expense => {
                let expense = Expense::new(id, description, amount);
                self.expenses.push(expense.clone());
                Entry::Expense(expense)
            }
            Category::Income => {
                let income = Income::new(id, description, amount);
                self.incomes.push(income.clone());
                Entry::Income(income)
            }
        }
    }

    fn take_next_id(&mut self, category: Category) -> EntryId {
        let counter = match category {
            Category::Expense => &mut self.next_expense_id,
            Category::Income => &mut self.next_income_id,
        };
        let id = *counter;
        *counter = id.next();
        id
    }

    /// Remove the entry with `id` from `category`
    ///
    /// Unknown ids are ignored. Returns the removed entry, if any.
    pub fn delete_entry(&mut self, category: Category, id: EntryId) -> Option<Entry> {
        match category {
            Category::Expense => {
                let index = self.expenses.iter().position(|e| e.id == id)?;
                Some(Entry::Expense(self.expenses.remove(index)))
            }
            Category::Income => {
                let index = self.incomes.iter().position(|i| i.id == id)?;
                Some(Entry::Income(self.incomes.remove(index)))
            }
        }
    }

    /// Rebuild totals, net budget and spend ratio from the current entries
    pub fn recompute_totals(&mut self) {
        let expense: Money = self.expenses.iter().map(|e| e.amount).sum();
        let income: Money = self.incomes.iter().map(|i| i.amount).sum();

        self.totals = Totals { expense, income };
        self.net_budget = income - expense;
        self.spend_ratio = expense.percent_of(income);

        trace!(
            income = income.cents(),
            expense = expense.cents(),
            net = self.net_budget.cents(),
            ratio = ?self.spend_ratio,
            "recomputed totals"
        );
    }

    /// Rebuild every expense's share of income
    ///
    /// Uses the income total from the last [`Ledger::recompute_totals`] call.
    pub fn recompute_percentages(&mut self) {
        let total_income = self.totals.income;
        for expense in &mut self.expenses {
            expense.calc_share(total_income);
        }
    }

    /// Each expense's share of income, in entry order
    pub fn percentages(&self) -> Vec<Option<u32>> {
        self.expenses.iter().map(|e| e.share_percent).collect()
    }

    /// Snapshot of the aggregates as of the last recompute
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary {
            net_budget: self.net_budget,
            total_income: self.totals.income,
            total_expense: self.totals.expense,
            spend_ratio: self.spend_ratio,
        }
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn incomes(&self) -> &[Income] {
        &self.incomes
    }

    /// Look up a single entry
    pub fn get(&self, category: Category, id: EntryId) -> Option<Entry> {
        match category {
            Category::Expense => self
                .expenses
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .map(Entry::Expense),
            Category::Income => self
                .incomes
                .iter()
                .find(|i| i.id == id)
                .cloned()
                .map(Entry::Income),
        }
    }

    /// Number of entries across both categories
    pub fn len(&self) -> usize {
        self.expenses.len() + self.incomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(d: i64) -> Money {
        Money::from_dollars_cents(d, 0)
    }

    #[test]
    fn test_ids_start_at_zero_per_category() {
        let mut ledger = Ledger::new();

        let a = ledger.add_entry(Category::Income, "Salary", dollars(1000));
        let b = ledger.add_entry(Category::Expense, "Rent", dollars(400));
        let c = ledger.add_entry(Category::Income, "Bonus", dollars(100));
        let d = ledger.add_entry(Category::Expense, "Food", dollars(50));

        assert_eq!(a.id(), EntryId::new(0));
        assert_eq!(b.id(), EntryId::new(0));
        assert_eq!(c.id(), EntryId::new(1));
        assert_eq!(d.id(), EntryId::new(1));
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let mut ledger = Ledger::new();
        ledger.add_entry(Category::Expense, "A", dollars(1));
        let b = ledger.add_entry(Category::Expense, "B", dollars(2));

        // Deleting the newest entry must not free its id
        ledger.delete_entry(Category::Expense, b.id());
        let c = ledger.add_entry(Category::Expense, "C", dollars(3));
        assert_eq!(c.id(), EntryId::new(2));

        // Nor does emptying the category
        ledger.delete_entry(Category::Expense, EntryId::new(0));
        ledger.delete_entry(Category::Expense, c.id());
        assert!(ledger.expenses().is_empty());
        let d = ledger.add_entry(Category::Expense, "D", dollars(4));
        assert_eq!(d.id(), EntryId::new(3));
    }

    #[test]
    fn test_add_returns_entry_and_appends() {
        let mut ledger = Ledger::new();
        let entry = ledger.add_entry(Category::Expense, "Rent", dollars(400));

        assert_eq!(entry.category(), Category::Expense);
        assert_eq!(entry.description(), "Rent");
        assert_eq!(entry.amount(), dollars(400));
        assert_eq!(entry.share_percent(), None);
        assert_eq!(ledger.get(Category::Expense, entry.id()), Some(entry));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_add_does_not_recompute() {
        let mut ledger = Ledger::new();
        ledger.add_entry(Category::Income, "Salary", dollars(1000));

        assert_eq!(ledger.summary(), BudgetSummary::default());

        ledger.recompute_totals();
        assert_eq!(ledger.summary().total_income, dollars(1000));
    }

    #[test]
    fn test_salary_and_rent_scenario() {
        let mut ledger = Ledger::new();
        ledger.add_entry(Category::Income, "Salary", dollars(1000));
        ledger.add_entry(Category::Expense, "Rent", dollars(400));

        ledger.recompute_totals();
        ledger.recompute_percentages();

        assert_eq!(
            ledger.totals(),
            Totals {
                income: dollars(1000),
                expense: dollars(400),
            }
        );
        let summary = ledger.summary();
        assert_eq!(summary.net_budget, dollars(600));
        assert_eq!(summary.spend_ratio, Some(40));
        assert_eq!(ledger.percentages(), vec![Some(40)]);
        assert_eq!(ledger.expenses()[0].share_percent, Some(40));
    }

    #[test]
    fn test_no_income_leaves_ratios_undefined() {
        let mut ledger = Ledger::new();
        ledger.add_entry(Category::Expense, "Coffee", dollars(5));

        ledger.recompute_totals();
        ledger.recompute_percentages();

        let summary = ledger.summary();
        assert_eq!(summary.spend_ratio, None);
        assert_eq!(summary.net_budget, -dollars(5));
        assert_eq!(ledger.percentages(), vec![None]);
    }

    #[test]
    fn test_delete_by_id_preserves_order() {
        let mut ledger = Ledger::new();
        let a = ledger.add_entry(Category::Expense, "A", dollars(10));
        let b = ledger.add_entry(Category::Expense, "B", dollars(20));
        let c = ledger.add_entry(Category::Expense, "C", dollars(30));

        let removed = ledger.delete_entry(Category::Expense, b.id());
        assert_eq!(removed, Some(b));

        let remaining: Vec<_> = ledger.expenses().iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![a.id(), c.id()]);
    }

    #[test]
    fn test_delete_then_recompute_reflects_remaining() {
        let mut ledger = Ledger::new();
        let a = ledger.add_entry(Category::Expense, "A", dollars(10));
        let b = ledger.add_entry(Category::Expense, "B", dollars(20));

        ledger.delete_entry(Category::Expense, a.id());
        ledger.recompute_totals();

        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(Entry::Expense(ledger.expenses()[0].clone()), b);
        assert_eq!(ledger.totals().expense, dollars(20));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut ledger = Ledger::new();
        ledger.add_entry(Category::Income, "Salary", dollars(1000));
        ledger.add_entry(Category::Expense, "Rent", dollars(400));
        ledger.recompute_totals();
        ledger.recompute_percentages();
        let before = ledger.clone();

        assert_eq!(ledger.delete_entry(Category::Expense, EntryId::new(7)), None);
        // Same id, wrong category
        assert_eq!(ledger.delete_entry(Category::Income, EntryId::new(1)), None);

        assert_eq!(ledger, before);
    }

    #[test]
    fn test_delete_is_scoped_to_category() {
        let mut ledger = Ledger::new();
        ledger.add_entry(Category::Income, "Salary", dollars(1000));
        ledger.add_entry(Category::Expense, "Rent", dollars(400));

        ledger.delete_entry(Category::Income, EntryId::new(0));

        assert!(ledger.incomes().is_empty());
        assert_eq!(ledger.expenses().len(), 1);
    }

    #[test]
    fn test_percentages_follow_current_income() {
        let mut ledger = Ledger::new();
        let salary = ledger.add_entry(Category::Income, "Salary", dollars(1000));
        ledger.add_entry(Category::Income, "Side gig", dollars(1000));
        ledger.add_entry(Category::Expense, "Rent", dollars(500));
        ledger.add_entry(Category::Expense, "Food", dollars(100));

        ledger.recompute_totals();
        ledger.recompute_percentages();
        assert_eq!(ledger.percentages(), vec![Some(25), Some(5)]);

        ledger.delete_entry(Category::Income, salary.id());
        ledger.recompute_totals();
        ledger.recompute_percentages();
        assert_eq!(ledger.percentages(), vec![Some(50), Some(10)]);
        assert_eq!(ledger.summary().spend_ratio, Some(60));
    }

    #[test]
    fn test_percentages_use_last_recomputed_income() {
        let mut ledger = Ledger::new();
        ledger.add_entry(Category::Income, "Salary", dollars(100));
        ledger.add_entry(Category::Expense, "Rent", dollars(50));

        // Without a totals pass the income total is still zero
        ledger.recompute_percentages();
        assert_eq!(ledger.percentages(), vec![None]);

        ledger.recompute_totals();
        ledger.recompute_percentages();
        assert_eq!(ledger.percentages(), vec![Some(50)]);
    }

    #[test]
    fn test_totals_match_sums_after_interleaving() {
        let mut ledger = Ledger::new();
        let mut handles = Vec::new();

        for (i, cents) in [1999, 5, 250_000, 42, 7_500, 13].iter().enumerate() {
            let category = if i % 2 == 0 {
                Category::Income
            } else {
                Category::Expense
            };
            let amount = Money::from_cents(*cents);
            handles.push(ledger.add_entry(category, format!("item {}", i), amount));
            ledger.recompute_totals();
        }
        ledger.delete_entry(handles[2].category(), handles[2].id());
        ledger.delete_entry(handles[3].category(), handles[3].id());
        ledger.recompute_totals();
        ledger.recompute_totals();

        let income: Money = ledger.incomes().iter().map(|i| i.amount).sum();
        let expense: Money = ledger.expenses().iter().map(|e| e.amount).sum();
        let summary = ledger.summary();

        assert_eq!(summary.total_income, income);
        assert_eq!(summary.total_expense, expense);
        assert_eq!(summary.total_income, Money::from_cents(1999 + 7_500));
        assert_eq!(summary.total_expense, Money::from_cents(5 + 13));
        assert_eq!(summary.net_budget, income - expense);
    }

    #[test]
    fn test_huge_totals_saturate() {
        let mut ledger = Ledger::new();
        let big = Money::from_cents(9_000_000_000_000_000_000);
        ledger.add_entry(Category::Income, "Windfall", big);
        ledger.add_entry(Category::Income, "Windfall", big);
        ledger.add_entry(Category::Expense, "Yacht", big);
        ledger.recompute_totals();
        ledger.recompute_percentages();

        let summary = ledger.summary();
        assert_eq!(summary.total_income, Money::from_cents(i64::MAX));
        assert_eq!(summary.total_expense, big);
        assert_eq!(summary.net_budget, Money::from_cents(i64::MAX) - big);
        assert_eq!(summary.spend_ratio, Some(98));
    }

    #[test]
    fn test_tiny_income_huge_expense_keeps_ratio_defined() {
        let mut ledger = Ledger::new();
        ledger.add_entry(Category::Income, "Change", Money::from_cents(1));
        ledger.add_entry(Category::Expense, "House", Money::from_cents(5_000_000_000));
        ledger.recompute_totals();
        ledger.recompute_percentages();

        assert_eq!(ledger.summary().spend_ratio, Some(u32::MAX));
        assert_eq!(ledger.percentages(), vec![Some(u32::MAX)]);
    }

    #[test]
    fn test_spend_ratio_rounds() {
        let mut ledger = Ledger::new();
        ledger.add_entry(Category::Income, "Salary", Money::from_cents(300));
        ledger.add_entry(Category::Expense, "Snack", Money::from_cents(200));
        ledger.recompute_totals();

        // 66.67% rounds to 67
        assert_eq!(ledger.summary().spend_ratio, Some(67));
    }
}
