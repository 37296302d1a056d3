//! Expense entry form
//!
//! Validates raw user input before it reaches the store: every field is
//! required and the amount must be a positive number.

use chrono::Local;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseRecord, Money};

/// Message shown when any field is left blank
pub const MISSING_FIELDS: &str = "Please fill in all fields";

/// Message shown when the amount is not a positive number
pub const INVALID_AMOUNT: &str = "Please enter a valid positive amount";

/// Raw text captured from the add-expense form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl ExpenseForm {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Check the form and build the record it describes
    pub fn validate(&self) -> LedgerResult<ExpenseRecord> {
        let date = self.date.trim();
        let category = self.category.trim();
        let amount = self.amount.trim();
        let description = self.description.trim();

        if date.is_empty() || category.is_empty() || amount.is_empty() || description.is_empty() {
            return Err(LedgerError::Validation(MISSING_FIELDS.to_string()));
        }

        let amount = Money::parse(amount)
            .ok()
            .filter(Money::is_positive)
            .ok_or_else(|| LedgerError::Validation(INVALID_AMOUNT.to_string()))?;

        Ok(ExpenseRecord::new(date, category, amount, description))
    }
}

/// Today's date as the form pre-fills it (YYYY-MM-DD)
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
