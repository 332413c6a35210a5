//! Terminal User Interface module
//!
//! The interactive front end: a ratatui screen with the budget header, an
//! input bar and the income/expense lists, driven by the coordinator through
//! [`TuiPresenter`].

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod presenter;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

pub use app::App;
pub use presenter::TuiPresenter;
pub use terminal::run_tui;
