//! Terminal presenter
//!
//! Holds what the screen shows: the input bar, the two item lists and the
//! header figures. The coordinator writes into it through the [`Presenter`]
//! trait; the views read it when drawing a frame.

use crate::models::{BudgetSummary, Category, Entry, ItemHandle, Money};
use crate::presenter::{Presenter, RawInput};

use super::widgets::TextInput;

/// Which field of the input bar is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    #[default]
    Type,
    Description,
    Amount,
}

impl InputField {
    pub fn next(self) -> Self {
        match self {
            Self::Type => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Type,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Type => Self::Amount,
            Self::Description => Self::Type,
            Self::Amount => Self::Description,
        }
    }
}

/// State of the input bar
#[derive(Debug, Clone)]
pub struct InputBarState {
    pub category: Category,
    pub description: TextInput,
    pub amount: TextInput,
    pub focused_field: InputField,
}

impl InputBarState {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            description: TextInput::new()
                .label("Description")
                .placeholder("Add description"),
            amount: TextInput::new().label("Value").placeholder("0.00"),
            focused_field: InputField::Description,
        }
    }

    /// Switch between income and expense
    pub fn toggle_category(&mut self) {
        self.category = self.category.toggled();
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Type a character into the focused field
    pub fn insert_char(&mut self, c: char) {
        match self.focused_field {
            InputField::Type => match c {
                '+' => self.category = Category::Income,
                '-' => self.category = Category::Expense,
                ' ' => self.toggle_category(),
                _ => {}
            },
            InputField::Description => self.description.insert(c),
            InputField::Amount => {
                if c.is_ascii_digit() || matches!(c, '.' | ',' | '$') {
                    self.amount.insert(c);
                }
            }
        }
    }

    /// Text field that receives editing keys, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            InputField::Type => None,
            InputField::Description => Some(&mut self.description),
            InputField::Amount => Some(&mut self.amount),
        }
    }

    /// Empty both text fields and put the cursor back on the description
    pub fn clear(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.focused_field = InputField::Description;
    }
}

/// One line in an item list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub handle: ItemHandle,
    pub description: String,
    pub amount: Money,
    /// Share of income, expenses only
    pub percent: Option<u32>,
}

/// Presenter backing the terminal UI
#[derive(Debug, Clone)]
pub struct TuiPresenter {
    pub input: InputBarState,
    /// Rows in the order they were added; drawn newest first
    incomes: Vec<ListRow>,
    expenses: Vec<ListRow>,
    summary: BudgetSummary,
}

impl TuiPresenter {
    pub fn new(default_category: Category) -> Self {
        Self {
            input: InputBarState::new(default_category),
            incomes: Vec::new(),
            expenses: Vec::new(),
            summary: BudgetSummary::default(),
        }
    }

    /// Rows of one list in display order (newest first)
    pub fn rows(&self, category: Category) -> impl Iterator<Item = &ListRow> {
        self.rows_in_order(category).iter().rev()
    }

    /// The row at `index` in display order
    pub fn row_at(&self, category: Category, index: usize) -> Option<&ListRow> {
        self.rows(category).nth(index)
    }

    pub fn row_count(&self, category: Category) -> usize {
        self.rows_in_order(category).len()
    }

    pub fn summary(&self) -> &BudgetSummary {
        &self.summary
    }

    fn rows_in_order(&self, category: Category) -> &Vec<ListRow> {
        match category {
            Category::Expense => &self.expenses,
            Category::Income => &self.incomes,
        }
    }

    fn rows_in_order_mut(&mut self, category: Category) -> &mut Vec<ListRow> {
        match category {
            Category::Expense => &mut self.expenses,
            Category::Income => &mut self.incomes,
        }
    }
}

impl Presenter for TuiPresenter {
    fn read_input(&self) -> RawInput {
        RawInput::new(
            self.input.category,
            self.input.description.value(),
            self.input.amount.value(),
        )
    }

    fn render_entry(&mut self, entry: &Entry) -> ItemHandle {
        let handle = ItemHandle::new(entry.category(), entry.id());
        self.rows_in_order_mut(entry.category()).push(ListRow {
            handle,
            description: entry.description().to_string(),
            amount: entry.amount(),
            percent: entry.share_percent(),
        });
        handle
    }

    fn remove_rendered_item(&mut self, handle: &ItemHandle) {
        self.rows_in_order_mut(handle.category)
            .retain(|row| row.handle != *handle);
    }

    fn render_summary(&mut self, summary: &BudgetSummary) {
        self.summary = *summary;
    }

    fn render_percentages(&mut self, percentages: &[Option<u32>]) {
        // Both lists append and remove the same items, so positions line up
        for (row, percent) in self.expenses.iter_mut().zip(percentages) {
            row.percent = *percent;
        }
    }

    fn clear_inputs(&mut self) {
        self.input.clear();
    }
}
