//! Budget header
//!
//! Net budget for the month, with income and expense totals and the share of
//! income spent

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::{format_amount, format_net_budget, format_percentage, month_title};
use crate::models::Category;
use crate::tui::app::App;

/// Render the header
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.presenter().summary();
    let symbol = app.settings.currency_symbol.as_str();

    let net_color = if summary.is_overspent() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(Span::styled(
            format_net_budget(summary.net_budget, symbol),
            Style::default().fg(net_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("INCOME    ", Style::default().fg(Color::White)),
            Span::styled(
                format_amount(summary.total_income, Some(Category::Income), symbol),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("EXPENSES  ", Style::default().fg(Color::White)),
            Span::styled(
                format_amount(summary.total_expense, Some(Category::Expense), symbol),
                Style::default().fg(Color::Red),
            ),
            Span::raw("  "),
            Span::styled(
                format_percentage(summary.spend_ratio),
                Style::default().fg(Color::Black).bg(Color::Red),
            ),
        ]),
    ];

    let block = Block::default()
        .title(format!(" Available budget in {} ", month_title(&app.today)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
