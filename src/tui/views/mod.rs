//! TUI Views module
//!
//! The header, the input bar, the two item lists and the status bar.

pub mod header;
pub mod input_bar;
pub mod lists;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::dialogs;
use super::layout::AppLayout;
use crate::models::Category;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    input_bar::render(frame, app, layout.input);
    lists::render(frame, app, layout.incomes, Category::Income);
    lists::render(frame, app, layout.expenses, Category::Expense);
    status_bar::render(frame, app, layout.status_bar);

    if app.show_help {
        dialogs::help::render(frame);
    }
}
