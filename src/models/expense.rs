//! Expense record model
//!
//! One stored expense: an opaque date string, a category name, a signed
//! amount and a free-form description.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A single expense held by the store
///
/// The date is kept exactly as the caller supplied it and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Caller-supplied date text (e.g. "2025-03-21")
    pub date: String,

    /// Category name, matched case-sensitively when aggregating
    pub category: String,

    /// Amount (signed; no currency unit)
    pub amount: Money,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Truncate every string field to at most `max_chars` characters
    ///
    /// `None` leaves the fields untouched. Truncation is silent.
    pub fn truncated(mut self, max_chars: Option<usize>) -> Self {
        if let Some(max) = max_chars {
            truncate_chars(&mut self.date, max);
            truncate_chars(&mut self.category, max);
            truncate_chars(&mut self.description, max);
        }
        self
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.category, self.amount, self.description
        )
    }
}

/// Shorten `value` in place to at most `max_chars` characters
///
/// Cuts on a character boundary, so multi-byte text is never split.
pub fn truncate_chars(value: &mut String, max_chars: usize) {
    if let Some((byte_idx, _)) = value.char_indices().nth(max_chars) {
        value.truncate(byte_idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = ExpenseRecord::new("2025-03-21", "Food", Money::from_cents(1050), "Lunch");
        assert_eq!(record.date, "2025-03-21");
        assert_eq!(record.category, "Food");
        assert_eq!(record.amount.cents(), 1050);
        assert_eq!(record.description, "Lunch");
    }

    #[test]
    fn test_truncate_chars() {
        let mut s = "abcdef".to_string();
        truncate_chars(&mut s, 3);
        assert_eq!(s, "abc");

        let mut short = "ab".to_string();
        truncate_chars(&mut short, 3);
        assert_eq!(short, "ab");

        let mut exact = "abc".to_string();
        truncate_chars(&mut exact, 3);
        assert_eq!(exact, "abc");
    }

    #[test]
    fn test_truncate_multibyte() {
        let mut s = "Ёжик в тумане".to_string();
        truncate_chars(&mut s, 4);
        assert_eq!(s, "Ёжик");
    }

    #[test]
    fn test_truncated_record() {
        let long = "x".repeat(150);
        let record = ExpenseRecord::new(long.clone(), long.clone(), Money::zero(), long.clone())
            .truncated(Some(99));
        assert_eq!(record.date.chars().count(), 99);
        assert_eq!(record.category.chars().count(), 99);
        assert_eq!(record.description.chars().count(), 99);

        let untouched =
            ExpenseRecord::new(long.clone(), "Food", Money::zero(), "").truncated(None);
        assert_eq!(untouched.date.len(), 150);
    }

    #[test]
    fn test_display() {
        let record = ExpenseRecord::new("2025-03-21", "Transport", Money::from_cents(500), "Bus");
        assert_eq!(record.to_string(), "2025-03-21 Transport $5.00 Bus");
    }
}
