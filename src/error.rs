//! Error types for the expense ledger
//!
//! Every ledger operation reports failure through `LedgerResult`. The variants
//! are all recoverable: a failed call leaves the store exactly as it was.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The store already holds its maximum number of records
    #[error("Capacity exhausted: the ledger holds at most {capacity} expenses")]
    CapacityExhausted { capacity: usize },

    /// A mutation targeted an index outside `[0, count)`
    #[error("Invalid index {index}: the ledger holds {count} expenses")]
    InvalidIndex { index: usize, count: usize },

    /// A query targeted an entity that does not exist
    #[error("{entity_type} not found at index {index}")]
    NotFound {
        entity_type: &'static str,
        index: usize,
    },

    /// A mutation would take a category total or the grand total out of range
    #[error("Amount rejected: totals would exceed the supported range")]
    TotalOutOfRange,

    /// Input rejected before it reached the store
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl LedgerError {
    /// Create a "not found" error for expense records
    pub fn record_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            index,
        }
    }

    /// Create a "not found" error for category aggregates
    pub fn aggregate_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Category total",
            index,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a capacity error
    pub fn is_capacity_exhausted(&self) -> bool {
        matches!(self, Self::CapacityExhausted { .. })
    }

    /// Check if this is an invalid index error
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
