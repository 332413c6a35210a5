//! Help dialog
//!
//! Lists the keyboard shortcuts for both focus areas

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Input bar"),
        Line::from(""),
        key_line("Tab / S-Tab", "Next / previous field"),
        key_line("Ctrl-T", "Toggle income / expense"),
        key_line("+ / -", "Pick type (on the type field)"),
        key_line("Enter", "Add item"),
        key_line("Esc", "Focus the lists"),
        Line::from(""),
        section("Lists"),
        Line::from(""),
        key_line("j / k", "Move selection"),
        key_line("Tab / h / l", "Switch list"),
        key_line("d / Del", "Delete selected item"),
        key_line("i / Esc", "Back to the input bar"),
        key_line("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

/// Create a key binding line
fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>14}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(description),
    ])
}
