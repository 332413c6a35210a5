//! Input bar
//!
//! Type toggle, description and value fields. The bar is drawn red while the
//! expense type is selected.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::tui::app::{App, Focus};
use crate::tui::layout::InputBarLayout;
use crate::tui::presenter::InputField;

/// Render the input bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let input = &app.presenter().input;
    let has_focus = app.focus == Focus::Input;

    let accent = match input.category {
        Category::Income => Color::Cyan,
        Category::Expense => Color::Red,
    };

    let block = Block::default()
        .title(" Add item (Enter) ")
        .borders(Borders::ALL)
        .border_style(if has_focus {
            Style::default().fg(accent)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = InputBarLayout::new(inner);

    // Category toggle
    let type_label = match input.category {
        Category::Income => "[ + Inc ]",
        Category::Expense => "[ - Exp ]",
    };
    let mut type_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    if has_focus && input.focused_field == InputField::Type {
        type_style = type_style.add_modifier(Modifier::REVERSED);
    }
    frame.render_widget(Paragraph::new(Span::styled(type_label, type_style)), layout.category);

    let description = input
        .description
        .clone()
        .accent(accent)
        .focused(has_focus && input.focused_field == InputField::Description);
    frame.render_widget(description, layout.description);

    let amount = input
        .amount
        .clone()
        .accent(accent)
        .focused(has_focus && input.focused_field == InputField::Amount);
    frame.render_widget(amount, layout.amount);
}
