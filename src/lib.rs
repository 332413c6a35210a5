//! Tally - a single-month budget tracker
//!
//! Tally keeps a list of income and expense items, derives the totals, the
//! available budget and each expense's share of income, and shows them in a
//! terminal UI. The budget model never talks to the screen directly: a
//! [`coordinator::Coordinator`] moves data between the [`ledger::Ledger`] and
//! any [`presenter::Presenter`].
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, entries, ids and the budget summary
//! - `ledger`: Entry storage and derived aggregates
//! - `presenter`: The view contract
//! - `coordinator`: Input validation and the add/delete/synchronize flow
//! - `display`: Amount and percentage formatting
//! - `tui`: Interactive terminal front end
//! - `cli`: Non-interactive commands (script replay)
//! - `config`: Configuration and path management
//! - `logging`: Tracing setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use tally::ledger::Ledger;
//! use tally::models::{Category, Money};
//!
//! let mut ledger = Ledger::new();
//! ledger.add_entry(Category::Income, "Salary", Money::from_cents(100_000));
//! ledger.add_entry(Category::Expense, "Rent", Money::from_cents(40_000));
//! ledger.recompute_totals();
//! ledger.recompute_percentages();
//!
//! assert_eq!(ledger.summary().net_budget, Money::from_cents(60_000));
//! assert_eq!(ledger.percentages(), vec![Some(40)]);
//! ```

pub mod cli;
pub mod config;
pub mod coordinator;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod presenter;
pub mod tui;

pub use error::{TallyError, TallyResult};
