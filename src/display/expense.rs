//! Expense display formatting
//!
//! Renders the expense table the way the budgeting UI lays it out: one row per
//! record with its 1-based row number, which is what `delete` and `show` take.

use crate::models::ExpenseRecord;

const DATE_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 16;
const AMOUNT_WIDTH: usize = 12;

/// Format a single expense row
pub fn format_expense_row(row: usize, record: &ExpenseRecord, currency_symbol: &str) -> String {
    format!(
        "{:>3}  {:<date_w$}  {:<cat_w$}  {:>amt_w$}  {}",
        row,
        truncate(&record.date, DATE_WIDTH),
        truncate(&record.category, CATEGORY_WIDTH),
        record.amount.format_with_symbol(currency_symbol),
        record.description,
        date_w = DATE_WIDTH,
        cat_w = CATEGORY_WIDTH,
        amt_w = AMOUNT_WIDTH,
    )
}

/// Format the full expense table
pub fn format_expense_table(records: &[ExpenseRecord], currency_symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<date_w$}  {:<cat_w$}  {:>amt_w$}  {}\n",
        "#",
        "Date",
        "Category",
        "Amount",
        "Description",
        date_w = DATE_WIDTH,
        cat_w = CATEGORY_WIDTH,
        amt_w = AMOUNT_WIDTH,
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for (idx, record) in records.iter().enumerate() {
        output.push_str(&format_expense_row(idx + 1, record, currency_symbol));
        output.push('\n');
    }

    output
}

/// Format one expense's details
pub fn format_expense_details(row: usize, record: &ExpenseRecord, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense #{}\n", row));
    output.push_str(&format!("  Date:        {}\n", record.date));
    output.push_str(&format!("  Category:    {}\n", record.category));
    output.push_str(&format!(
        "  Amount:      {}\n",
        record.amount.format_with_symbol(currency_symbol)
    ));
    if !record.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", record.description));
    }

    output
}

/// Truncate a string for a fixed-width column, adding an ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
