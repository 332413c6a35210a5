//! Layout definitions for the TUI
//!
//! Header with the budget figures, the two item lists side by side, the input
//! bar and a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Month title and budget figures
    pub header: Rect,
    /// Income list
    pub incomes: Rect,
    /// Expense list
    pub expenses: Rect,
    /// Type / description / value fields
    pub input: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Header
                Constraint::Length(3), // Input bar
                Constraint::Min(3),    // Lists
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let lists = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[2]);

        Self {
            header: vertical[0],
            input: vertical[1],
            incomes: lists[0],
            expenses: lists[1],
            status_bar: vertical[3],
        }
    }
}

/// Layout inside the input bar
pub struct InputBarLayout {
    pub category: Rect,
    pub description: Rect,
    pub amount: Rect,
}

impl InputBarLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12), // [ + Income ]
                Constraint::Min(20),    // Description
                Constraint::Length(24), // Value
            ])
            .split(area);

        Self {
            category: chunks[0],
            description: chunks[1],
            amount: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
