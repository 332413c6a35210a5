//! Application state for the TUI
//!
//! The App struct holds the coordinator (and through it the ledger and the
//! presenter) plus the purely visual state: focus, selection, help overlay.

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::coordinator::Coordinator;
use crate::models::{Category, Entry, ItemHandle};

use super::presenter::TuiPresenter;

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Lists,
}

/// Main application state
pub struct App {
    /// Owns the ledger and the presenter
    pub coordinator: Coordinator<TuiPresenter>,

    /// Application settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which part of the screen is focused
    pub focus: Focus,

    /// Which list the selection is in
    pub selected_column: Category,

    /// Selected row in display order
    pub selected_index: usize,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Date the header title is built from
    pub today: NaiveDate,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: Settings) -> Self {
        let presenter = TuiPresenter::new(settings.default_category);
        Self {
            coordinator: Coordinator::new(presenter),
            settings,
            should_quit: false,
            focus: Focus::default(),
            selected_column: Category::Income,
            selected_index: 0,
            show_help: false,
            today: Local::now().date_naive(),
        }
    }

    /// Render the initial state
    pub fn start(&mut self) {
        self.coordinator.start();
    }

    pub fn presenter(&self) -> &TuiPresenter {
        self.coordinator.presenter()
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Submit the input bar
    pub fn submit(&mut self) -> Option<Entry> {
        let entry = self.coordinator.add_item()?;
        // Newest entries are drawn at the top
        self.selected_column = entry.category();
        self.selected_index = 0;
        Some(entry)
    }

    /// Handle of the row under the selection
    pub fn selected_handle(&self) -> Option<ItemHandle> {
        self.presenter()
            .row_at(self.selected_column, self.selected_index)
            .map(|row| row.handle)
    }

    /// Delete the selected row
    pub fn delete_selected(&mut self) -> Option<Entry> {
        let handle = self.selected_handle()?;
        let removed = self.coordinator.delete_item(&handle);
        self.clamp_selection();
        removed
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn focus_lists(&mut self) {
        self.focus = Focus::Lists;
        self.clamp_selection();
    }

    /// Move the selection to the other list
    pub fn switch_column(&mut self) {
        self.selected_column = self.selected_column.toggled();
        self.clamp_selection();
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let count = self.presenter().row_count(self.selected_column);
        if self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.presenter().row_count(self.selected_column);
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
