//! Budget summary snapshot
//!
//! What the header of the widget shows. Produced by the ledger after a
//! recompute; presenters only ever read it.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Read-only view of the ledger's aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Total income minus total expenses
    pub net_budget: Money,
    pub total_income: Money,
    pub total_expense: Money,
    /// Total expenses as a whole percentage of total income; `None` without income
    pub spend_ratio: Option<u32>,
}

impl BudgetSummary {
    /// Whether expenses exceed income
    pub fn is_overspent(&self) -> bool {
        self.net_budget.is_negative()
    }
}
