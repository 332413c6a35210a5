//! Income and expense lists
//!
//! Each list shows newest entries first. Expense rows also show their share
//! of total income.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::display::{format_amount, format_percentage};
use crate::models::Category;
use crate::tui::app::{App, Focus};

/// Render one list
pub fn render(frame: &mut Frame, app: &App, area: Rect, category: Category) {
    let presenter = app.presenter();
    let symbol = app.settings.currency_symbol.as_str();
    let color = match category {
        Category::Income => Color::Green,
        Category::Expense => Color::Red,
    };
    let is_active = app.focus == Focus::Lists && app.selected_column == category;

    let rows: Vec<Row> = presenter
        .rows(category)
        .map(|row| {
            let mut cells = vec![
                Cell::from(row.description.clone()),
                Cell::from(format_amount(row.amount, Some(category), symbol))
                    .style(Style::default().fg(color)),
            ];
            if category == Category::Expense {
                cells.push(
                    Cell::from(format_percentage(row.percent))
                        .style(Style::default().fg(Color::White)),
                );
            }
            Row::new(cells)
        })
        .collect();

    let widths: Vec<Constraint> = match category {
        Category::Income => vec![Constraint::Min(10), Constraint::Length(16)],
        Category::Expense => vec![
            Constraint::Min(10),
            Constraint::Length(16),
            Constraint::Length(5),
        ],
    };

    let title = match category {
        Category::Income => format!(" Income ({}) ", presenter.row_count(category)),
        Category::Expense => format!(" Expenses ({}) ", presenter.row_count(category)),
    };

    let border_style = if is_active {
        Style::default().fg(color)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .title(title)
                .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_active && presenter.row_count(category) > 0 {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
