//! Display formatting for terminal output
//!
//! Text renderings shared by the TUI and the replay command: signed amounts
//! with thousands separators, percentage labels and the month title.

pub mod format;

pub use format::{format_amount, format_net_budget, format_percentage, month_title};
