//! Entry models
//!
//! An entry is a single income or expense line item. Expenses additionally
//! carry their share of total income, which only the ledger's recompute pass
//! fills in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EntryId;
use super::money::Money;

/// Which side of the budget an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Money going out
    Expense,
    /// Money coming in
    Income,
}

impl Category {
    /// Short tag used in item handles and replay scripts
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Expense => "exp",
            Self::Income => "inc",
        }
    }

    /// The other category
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Expense => Self::Income,
            Self::Income => Self::Expense,
        }
    }

    /// Parse a category from its tag or full name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "exp" | "expense" | "-" => Some(Self::Expense),
            "inc" | "income" | "+" => Some(Self::Income),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// A debit line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: EntryId,
    pub description: String,
    pub amount: Money,
    /// Share of total income as a whole percentage; `None` until computed or
    /// while there is no income
    pub share_percent: Option<u32>,
}

impl Expense {
    pub fn new(id: EntryId, description: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            share_percent: None,
        }
    }

    /// Recompute the share of `total_income` this expense represents
    pub fn calc_share(&mut self, total_income: Money) {
        self.share_percent = self.amount.percent_of(total_income);
    }
}

/// A credit line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub id: EntryId,
    pub description: String,
    pub amount: Money,
}

impl Income {
    pub fn new(id: EntryId, description: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
        }
    }
}

/// Either kind of line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Entry {
    Expense(Expense),
    Income(Income),
}

impl Entry {
    pub fn category(&self) -> Category {
        match self {
            Self::Expense(_) => Category::Expense,
            Self::Income(_) => Category::Income,
        }
    }

    pub fn id(&self) -> EntryId {
        match self {
            Self::Expense(e) => e.id,
            Self::Income(i) => i.id,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Expense(e) => &e.description,
            Self::Income(i) => &i.description,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::Expense(e) => e.amount,
            Self::Income(i) => i.amount,
        }
    }

    /// Share of income, for expenses only
    pub fn share_percent(&self) -> Option<u32> {
        match self {
            Self::Expense(e) => e.share_percent,
            Self::Income(_) => None,
        }
    }
}

impl From<Expense> for Entry {
    fn from(expense: Expense) -> Self {
        Self::Expense(expense)
    }
}

impl From<Income> for Entry {
    fn from(income: Income) -> Self {
        Self::Income(income)
    }
}
