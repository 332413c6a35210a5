//! Core data models for Tally
//!
//! Line items (income and expense entries), their ids and handles, money
//! amounts and the summary snapshot shown in the header.

pub mod entry;
pub mod ids;
pub mod money;
pub mod summary;

pub use entry::{Category, Entry, Expense, Income};
pub use ids::{EntryId, ItemHandle};
pub use money::{Money, MoneyParseError};
pub use summary::BudgetSummary;
