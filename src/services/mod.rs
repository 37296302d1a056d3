//! Service layer for the expense ledger
//!
//! The store applies mutations, the calculator rebuilds aggregates after each
//! one, and the refresh hook tells the presentation layer to redraw.

pub mod aggregate;
pub mod notify;
pub mod store;

pub use aggregate::{AggregateCalculator, Aggregation};
pub use notify::{RefreshFlag, RefreshHook};
pub use store::ExpenseStore;
