//! Budget Planner - in-memory expense ledger
//!
//! This library stores expense records, keeps per-category totals consistent
//! with them, and hands snapshots of individual records to a presentation
//! layer for rendering. Nothing is persisted and everything runs synchronously
//! on the caller's thread.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file location and ledger limits
//! - `error`: Custom error types
//! - `models`: Expense records, category aggregates and money
//! - `services`: The expense store, aggregate calculator and refresh hook
//! - `export`: JSON snapshots of records and aggregates
//! - `display`: Terminal formatting of the expense table and totals
//! - `cli`: Form validation and the interactive shell
//!
//! # Example
//!
//! ```rust
//! use budget_planner::models::Money;
//! use budget_planner::services::ExpenseStore;
//!
//! let mut store = ExpenseStore::default();
//! store.add("2025-03-21", "Food", Money::from_cents(1050), "Lunch")?;
//! store.add("2025-03-21", "Transport", Money::from_cents(500), "Bus")?;
//!
//! assert_eq!(store.category_count(), 2);
//! assert_eq!(store.grand_total(), Money::from_cents(1550));
//! assert_eq!(
//!     store.serialize_category_aggregate(0)?,
//!     r#"{"name":"Food","total":10.50}"#
//! );
//! # Ok::<(), budget_planner::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{LedgerError, LedgerResult};
pub use services::{AggregateCalculator, ExpenseStore, RefreshHook};
