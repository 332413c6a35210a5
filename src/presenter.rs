//! The view contract
//!
//! A presenter turns structured budget data into something the user sees and
//! hands raw user input back. It owns no budget state: the coordinator tells
//! it what to show and when.

use crate::models::{BudgetSummary, Category, Entry, ItemHandle};

/// Unvalidated values from the input fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    pub category: Category,
    pub description: String,
    /// Amount exactly as typed
    pub raw_amount: String,
}

impl RawInput {
    pub fn new(
        category: Category,
        description: impl Into<String>,
        raw_amount: impl Into<String>,
    ) -> Self {
        Self {
            category,
            description: description.into(),
            raw_amount: raw_amount.into(),
        }
    }
}

/// Everything the coordinator needs from a front end
pub trait Presenter {
    /// Current contents of the input fields
    fn read_input(&self) -> RawInput;

    /// Show a newly added entry; the returned handle identifies it later
    fn render_entry(&mut self, entry: &Entry) -> ItemHandle;

    /// Stop showing a previously rendered entry
    fn remove_rendered_item(&mut self, handle: &ItemHandle);

    /// Show the header figures
    fn render_summary(&mut self, summary: &BudgetSummary);

    /// Show each expense's share of income, in ledger expense order
    fn render_percentages(&mut self, percentages: &[Option<u32>]);

    /// Reset the input fields after a successful add
    fn clear_inputs(&mut self);
}
