//! Amount and percentage formatting

use chrono::Datelike;

use crate::models::{Category, Money};

/// Placeholder shown where a percentage is undefined
pub const NO_PERCENTAGE: &str = "---";

/// Format an amount as `+ $1,234.56` (income), `- $1,234.56` (expense) or
/// `$1,234.56` when no category applies
pub fn format_amount(amount: Money, category: Option<Category>, symbol: &str) -> String {
    let sign = match category {
        Some(Category::Income) => "+ ",
        Some(Category::Expense) => "- ",
        None => "",
    };

    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(amount.dollars().unsigned_abs()),
        amount.cents_part()
    )
}

/// Format the net budget, unsigned; an overspent budget reads as zero
pub fn format_net_budget(net: Money, symbol: &str) -> String {
    format_amount(net.max(Money::zero()), None, symbol)
}

/// Format a share of income: `40%`, or `---` when undefined or zero
pub fn format_percentage(percent: Option<u32>) -> String {
    match percent {
        Some(p) if p > 0 => format!("{}%", p),
        _ => NO_PERCENTAGE.to_string(),
    }
}

/// Title for the budget header, e.g. "October 2026"
pub fn month_title<D: Datelike>(date: &D) -> String {
    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    format!("{} {}", MONTHS[date.month0() as usize], date.year())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
