//! Event handler for the TUI
//!
//! Routes keyboard events to the input bar or the item lists depending on
//! focus. Submitting the input bar and deleting a row are the only keys that
//! reach the coordinator.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};
use super::event::Event;
use super::presenter::InputField;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => {}
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // Any key closes the help overlay
    if app.show_help {
        app.toggle_help();
        return;
    }

    match app.focus {
        Focus::Input => handle_input_key(app, key),
        Focus::Lists => handle_lists_key(app, key),
    }
}

/// Handle keys while the input bar is focused
fn handle_input_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('t') {
            app.coordinator.presenter_mut().input.toggle_category();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.focus_lists();
            return;
        }
        KeyCode::Enter => {
            app.submit();
            return;
        }
        _ => {}
    }

    let input = &mut app.coordinator.presenter_mut().input;

    match key.code {
        KeyCode::Tab => input.next_field(),
        KeyCode::BackTab => input.prev_field(),
        KeyCode::Left | KeyCode::Right if input.focused_field == InputField::Type => {
            input.toggle_category();
        }
        KeyCode::Char(c) => input.insert_char(c),
        code => {
            if let Some(field) = input.focused_input() {
                match code {
                    KeyCode::Backspace => field.backspace(),
                    KeyCode::Delete => field.delete(),
                    KeyCode::Left => field.move_left(),
                    KeyCode::Right => field.move_right(),
                    KeyCode::Home => field.move_start(),
                    KeyCode::End => field.move_end(),
                    _ => {}
                }
            }
        }
    }
}

/// Handle keys while the item lists are focused
fn handle_lists_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Esc => app.focus_input(),
        KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Char('h')
        | KeyCode::Char('l')
        | KeyCode::Left
        | KeyCode::Right => app.switch_column(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected();
        }
        _ => {}
    }
}
