//! Category totals and grand total formatting

use crate::models::{CategoryAggregate, Money};

/// Format the per-category totals, one "Name: $x.xx" line each
pub fn format_category_totals(aggregates: &[CategoryAggregate], currency_symbol: &str) -> String {
    if aggregates.is_empty() {
        return "No categories yet.\n".to_string();
    }

    let mut output = String::new();
    for aggregate in aggregates {
        output.push_str(&format!(
            "  {}: {}\n",
            aggregate.name,
            aggregate.total.format_with_symbol(currency_symbol)
        ));
    }
    output
}

/// Format the category block followed by the grand total
///
/// `uncategorized` is the number of records the category cap kept out of
/// the per-category lines.
pub fn format_summary(
    aggregates: &[CategoryAggregate],
    grand_total: Money,
    uncategorized: usize,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str("Category Totals:\n");
    output.push_str(&format_category_totals(aggregates, currency_symbol));
    if uncategorized > 0 {
        output.push_str(&format!(
            "  ({} expense(s) over the category limit not shown)\n",
            uncategorized
        ));
    }
    output.push_str(&format!(
        "Total Expenses: {}\n",
        grand_total.format_with_symbol(currency_symbol)
    ));

    output
}
