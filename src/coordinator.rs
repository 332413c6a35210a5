//! The controller
//!
//! Owns the ledger and a presenter and runs the two user transitions: adding
//! an entry from the input fields and deleting a rendered entry. After either
//! one it runs [`Coordinator::synchronize`], which is the only path that
//! recomputes the ledger, so totals are always refreshed before percentages.

use std::fmt;

use tracing::debug;

use crate::ledger::Ledger;
use crate::models::{Category, Entry, ItemHandle, Money};
use crate::presenter::{Presenter, RawInput};

/// Why an add request was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    EmptyDescription,
    NotANumber(String),
    NotPositive(Money),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description is empty"),
            Self::NotANumber(raw) => write!(f, "amount '{}' is not a number", raw),
            Self::NotPositive(amount) => write!(f, "amount {} is not positive", amount),
        }
    }
}

impl std::error::Error for InputError {}

/// Input that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInput {
    pub category: Category,
    pub description: String,
    pub amount: Money,
}

/// Check that the description is non-empty and the amount a positive number
pub fn validate_input(input: &RawInput) -> Result<ValidInput, InputError> {
    let description = input.description.trim();
    if description.is_empty() {
        return Err(InputError::EmptyDescription);
    }

    let amount = Money::parse(&input.raw_amount)
        .map_err(|_| InputError::NotANumber(input.raw_amount.trim().to_string()))?;
    if !amount.is_positive() {
        return Err(InputError::NotPositive(amount));
    }

    Ok(ValidInput {
        category: input.category,
        description: description.to_string(),
        amount,
    })
}

/// Keeps a [`Ledger`] and a [`Presenter`] consistent
pub struct Coordinator<P: Presenter> {
    ledger: Ledger,
    presenter: P,
}

impl<P: Presenter> Coordinator<P> {
    /// Create a coordinator over an empty ledger
    pub fn new(presenter: P) -> Self {
        Self::with_ledger(Ledger::new(), presenter)
    }

    pub fn with_ledger(ledger: Ledger, presenter: P) -> Self {
        Self { ledger, presenter }
    }

    /// Show the initial (empty) budget
    pub fn start(&mut self) {
        self.synchronize();
    }

    /// Handle an "add requested" intent
    ///
    /// Invalid input is dropped without touching the ledger or the view.
    /// Returns the created entry.
    pub fn add_item(&mut self) -> Option<Entry> {
        let input = self.presenter.read_input();

        let valid = match validate_input(&input) {
            Ok(valid) => valid,
            Err(reason) => {
                debug!(category = %input.category, %reason, "ignoring add request");
                return None;
            }
        };

        let entry = self
            .ledger
            .add_entry(valid.category, valid.description, valid.amount);

        // Front ends delete by this handle later
        let handle = self.presenter.render_entry(&entry);
        debug!(%handle, amount = entry.amount().cents(), "added entry");

        self.presenter.clear_inputs();
        self.synchronize();

        Some(entry)
    }

    /// Handle a "delete requested" intent for a rendered item
    ///
    /// Returns the removed entry; a handle with no matching entry changes
    /// nothing in the ledger.
    pub fn delete_item(&mut self, handle: &ItemHandle) -> Option<Entry> {
        let removed = self.ledger.delete_entry(handle.category, handle.id);
        match &removed {
            Some(_) => debug!(%handle, "deleted entry"),
            None => debug!(%handle, "delete requested for unknown entry"),
        }

        self.presenter.remove_rendered_item(handle);
        // Removing an income changes every expense share, so percentages
        // are always refreshed too
        self.synchronize();

        removed
    }

    /// Recompute the ledger and push the results to the presenter
    ///
    /// Totals first, then the summary, then percentages (which read the fresh
    /// income total), then the percentages themselves.
    pub fn synchronize(&mut self) {
        self.ledger.recompute_totals();
        let summary = self.ledger.summary();
        self.presenter.render_summary(&summary);

        self.ledger.recompute_percentages();
        let percentages = self.ledger.percentages();
        self.presenter.render_percentages(&percentages);
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Give the presenter back, dropping the ledger
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
