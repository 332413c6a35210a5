//! Replay CLI command
//!
//! Drives the coordinator from a CSV script instead of the keyboard. Each row
//! is one user intent:
//!
//! ```text
//! add,inc,Salary,1000
//! add,exp,Rent,400
//! delete,exp-0
//! ```
//!
//! Add rows go through the same validation as the TUI, so a row with an empty
//! description or a bad amount is dropped. Rows that cannot be read as an
//! intent at all are reported with their line number.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::settings::Settings;
use crate::coordinator::Coordinator;
use crate::display::{format_amount, format_net_budget, format_percentage};
use crate::error::{TallyError, TallyResult};
use crate::models::{BudgetSummary, Category, Entry, Expense, Income, ItemHandle};
use crate::presenter::{Presenter, RawInput};

/// Presenter fed from script rows
///
/// The pending input is set before each add request; rendered output is kept
/// so the final state can be checked against what the ledger holds.
#[derive(Debug)]
pub struct ReplayPresenter {
    pending: RawInput,
    rendered: Vec<ItemHandle>,
    summary: BudgetSummary,
    percentages: Vec<Option<u32>>,
}

impl ReplayPresenter {
    pub fn new() -> Self {
        Self {
            pending: RawInput::new(Category::Income, "", ""),
            rendered: Vec::new(),
            summary: BudgetSummary::default(),
            percentages: Vec::new(),
        }
    }

    /// Set the values the next add request will read
    pub fn set_pending(&mut self, input: RawInput) {
        self.pending = input;
    }

    /// Handles of items currently shown, in insertion order
    pub fn rendered(&self) -> &[ItemHandle] {
        &self.rendered
    }

    /// The most recently rendered summary
    pub fn summary(&self) -> &BudgetSummary {
        &self.summary
    }

    /// The most recently rendered expense percentages
    pub fn percentages(&self) -> &[Option<u32>] {
        &self.percentages
    }
}

impl Default for ReplayPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for ReplayPresenter {
    fn read_input(&self) -> RawInput {
        self.pending.clone()
    }

    fn render_entry(&mut self, entry: &Entry) -> ItemHandle {
        let handle = ItemHandle::new(entry.category(), entry.id());
        self.rendered.push(handle);
        handle
    }

    fn remove_rendered_item(&mut self, handle: &ItemHandle) {
        self.rendered.retain(|h| h != handle);
    }

    fn render_summary(&mut self, summary: &BudgetSummary) {
        self.summary = *summary;
    }

    fn render_percentages(&mut self, percentages: &[Option<u32>]) {
        self.percentages = percentages.to_vec();
    }

    fn clear_inputs(&mut self) {
        self.pending = RawInput::new(self.pending.category, "", "");
    }
}

/// Final state after a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub summary: BudgetSummary,
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    /// Add rows dropped by input validation
    pub ignored: usize,
}

impl ReplayReport {
    /// Render the report as aligned text
    pub fn render_text(&self, symbol: &str) -> String {
        let summary = &self.summary;
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Available budget: {}",
            format_net_budget(summary.net_budget, symbol)
        );
        let _ = writeln!(
            out,
            "Income:           {}",
            format_amount(summary.total_income, Some(Category::Income), symbol)
        );
        let _ = writeln!(
            out,
            "Expenses:         {}  {}",
            format_amount(summary.total_expense, Some(Category::Expense), symbol),
            format_percentage(summary.spend_ratio)
        );

        let _ = writeln!(out);
        let _ = writeln!(out, "Income ({})", self.incomes.len());
        for income in &self.incomes {
            let handle = ItemHandle::new(Category::Income, income.id);
            let _ = writeln!(
                out,
                "  {:<7} {:<30} {:>16}",
                handle.to_string(),
                income.description,
                format_amount(income.amount, Some(Category::Income), symbol)
            );
        }

        let _ = writeln!(out, "Expenses ({})", self.expenses.len());
        for expense in &self.expenses {
            let handle = ItemHandle::new(Category::Expense, expense.id);
            let _ = writeln!(
                out,
                "  {:<7} {:<30} {:>16}  {:>4}",
                handle.to_string(),
                expense.description,
                format_amount(expense.amount, Some(Category::Expense), symbol),
                format_percentage(expense.share_percent)
            );
        }

        if self.ignored > 0 {
            let _ = writeln!(out);
            let _ = writeln!(out, "Ignored {} invalid add row(s)", self.ignored);
        }

        out
    }
}

/// One parsed script row
#[derive(Debug, Clone, PartialEq, Eq)]
enum Intent {
    Add(RawInput),
    Delete(ItemHandle),
}

fn parse_row(record: &csv::StringRecord, row: usize) -> TallyResult<Intent> {
    let field = |i: usize| record.get(i).unwrap_or("");

    match field(0).to_ascii_lowercase().as_str() {
        "add" => {
            if record.len() < 4 {
                return Err(TallyError::script(
                    row,
                    "add expects: add,<inc|exp>,<description>,<amount>",
                ));
            }
            let category = Category::parse(field(1)).ok_or_else(|| {
                TallyError::script(row, format!("unknown item type '{}'", field(1)))
            })?;
            Ok(Intent::Add(RawInput::new(category, field(2), field(3))))
        }
        "delete" => {
            let handle = field(1)
                .parse::<ItemHandle>()
                .map_err(|e| TallyError::script(row, e.to_string()))?;
            Ok(Intent::Delete(handle))
        }
        other => Err(TallyError::script(row, format!("unknown verb '{}'", other))),
    }
}

/// Replay a CSV script through a fresh coordinator
pub fn run_replay<R: Read>(reader: R) -> TallyResult<ReplayReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut coordinator = Coordinator::new(ReplayPresenter::new());
    coordinator.start();

    let mut ignored = 0;
    let mut rows = 0;

    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(index + 1);
        rows += 1;

        match parse_row(&record, row)? {
            Intent::Add(input) => {
                coordinator.presenter_mut().set_pending(input);
                if coordinator.add_item().is_none() {
                    debug!(row, "add row ignored");
                    ignored += 1;
                }
            }
            Intent::Delete(handle) => {
                coordinator.delete_item(&handle);
            }
        }
    }

    let ledger = coordinator.ledger();
    info!(rows, entries = ledger.len(), ignored, "replay finished");

    Ok(ReplayReport {
        summary: *coordinator.presenter().summary(),
        incomes: ledger.incomes().to_vec(),
        expenses: ledger.expenses().to_vec(),
        ignored,
    })
}

/// Handle the replay command: run the script file and print the result
pub fn handle_replay_command(settings: &Settings, file: &Path, json: bool) -> TallyResult<()> {
    let handle = File::open(file).map_err(|e| {
        TallyError::Io(format!("Failed to open script '{}': {}", file.display(), e))
    })?;

    let report = run_replay(handle)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text(&settings.currency_symbol));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, Money};

    fn replay(script: &str) -> TallyResult<ReplayReport> {
        run_replay(script.as_bytes())
    }

    #[test]
    fn test_salary_and_rent() {
        let report = replay("add,inc,Salary,1000\nadd,exp,Rent,400\n").unwrap();

        assert_eq!(report.summary.total_income, Money::from_cents(100_000));
        assert_eq!(report.summary.total_expense, Money::from_cents(40_000));
        assert_eq!(report.summary.net_budget, Money::from_cents(60_000));
        assert_eq!(report.summary.spend_ratio, Some(40));
        assert_eq!(report.expenses[0].share_percent, Some(40));
        assert_eq!(report.ignored, 0);
    }

    #[test]
    fn test_delete_row() {
        let report = replay("add,exp,A,10\nadd,exp,B,20\ndelete,exp-0\n").unwrap();

        assert_eq!(report.expenses.len(), 1);
        assert_eq!(report.expenses[0].description, "B");
        assert_eq!(report.expenses[0].id, EntryId::new(1));
        assert_eq!(report.summary.total_expense, Money::from_cents(2_000));
    }

    #[test]
    fn test_delete_unknown_handle_is_noop() {
        let report = replay("add,inc,Salary,1000\ndelete,exp-7\n").unwrap();

        assert_eq!(report.incomes.len(), 1);
        assert_eq!(report.summary.net_budget, Money::from_cents(100_000));
    }

    #[test]
    fn test_invalid_add_rows_are_ignored() {
        let report = replay("add,inc,,100\nadd,exp,Coffee,abc\nadd,exp,Tea,0\n").unwrap();

        assert!(report.incomes.is_empty());
        assert!(report.expenses.is_empty());
        assert_eq!(report.ignored, 3);
    }

    #[test]
    fn test_unknown_verb_reports_line() {
        let err = replay("add,inc,Salary,1000\nrename,inc-0,Pay\n").unwrap_err();

        assert!(err.is_script());
        assert!(matches!(err, TallyError::Script { row: 2, .. }));
    }

    #[test]
    fn test_bad_handle_reports_line() {
        let err = replay("delete,nope\n").unwrap_err();
        assert!(matches!(err, TallyError::Script { row: 1, .. }));
    }

    #[test]
    fn test_short_add_row() {
        let err = replay("add,inc,Salary\n").unwrap_err();
        assert!(matches!(err, TallyError::Script { row: 1, .. }));
    }

    #[test]
    fn test_comments_and_whitespace() {
        let script = "# monthly budget\n add , income , Salary , 1000 \nadd,-,Rent,\"1,200.50\"\n";
        let report = replay(script).unwrap();

        assert_eq!(report.incomes[0].description, "Salary");
        assert_eq!(report.expenses[0].amount, Money::from_cents(120_050));
    }

    #[test]
    fn test_presenter_mirrors_ledger() {
        let mut coordinator = Coordinator::new(ReplayPresenter::new());
        coordinator.start();
        coordinator
            .presenter_mut()
            .set_pending(RawInput::new(Category::Income, "Salary", "1000"));
        coordinator.add_item();
        coordinator
            .presenter_mut()
            .set_pending(RawInput::new(Category::Expense, "Rent", "250"));
        coordinator.add_item();

        let presenter = coordinator.presenter();
        assert_eq!(presenter.rendered().len(), 2);
        assert_eq!(presenter.percentages(), &[Some(25)]);
        assert_eq!(presenter.summary().spend_ratio, Some(25));
    }

    #[test]
    fn test_render_text() {
        let report = replay("add,inc,Salary,1000\nadd,exp,Rent,400\nadd,exp,,1\n").unwrap();
        let text = report.render_text("$");

        assert!(text.contains("Available budget: $600.00"));
        assert!(text.contains("Income:           + $1,000.00"));
        assert!(text.contains("- $400.00"));
        assert!(text.contains("inc-0"));
        assert!(text.contains("exp-0"));
        assert!(text.contains("40%"));
        assert!(text.contains("Ignored 1 invalid add row(s)"));
    }

    #[test]
    fn test_render_text_overspent_budget_reads_zero() {
        let report = replay("add,exp,Coffee,5\n").unwrap();
        let text = report.render_text("$");

        assert!(text.contains("Available budget: $0.00\n"));
        assert!(text.contains("Expenses:         - $5.00  ---"));
    }

    #[test]
    fn test_json_report() {
        let report = replay("add,exp,Coffee,5\n").unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["summary"]["spend_ratio"], serde_json::Value::Null);
        assert_eq!(json["expenses"][0]["description"], "Coffee");
        assert_eq!(json["expenses"][0]["amount"], 500);
    }
}
