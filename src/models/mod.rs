//! Core data models for the expense ledger
//!
//! Expense records, the category aggregates derived from them, and the money
//! type both are expressed in.

pub mod aggregate;
pub mod expense;
pub mod money;

pub use aggregate::CategoryAggregate;
pub use expense::{truncate_chars, ExpenseRecord};
pub use money::{Money, MoneyParseError};
