//! Status bar view
//!
//! Shows entry counts and the key hints for the focused area

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Category;
use crate::tui::app::{App, Focus};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let presenter = app.presenter();

    let mut spans = vec![
        Span::styled(
            format!(" {} income", presenter.row_count(Category::Income)),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("{} expenses", presenter.row_count(Category::Expense)),
            Style::default().fg(Color::Red),
        ),
    ];

    if let Some(handle) = app.selected_handle().filter(|_| app.focus == Focus::Lists) {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            handle.to_string(),
            Style::default().fg(Color::Cyan),
        ));
    }

    let hints = match app.focus {
        Focus::Input => " Tab:Field  ^T:Type  Enter:Add  Esc:Lists ",
        Focus::Lists => " j/k:Move  Tab:Column  d:Delete  i:Input  ?:Help  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
