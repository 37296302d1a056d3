//! Category aggregate model
//!
//! A derived (category name, running total) pair. Aggregates are rebuilt from
//! the record collection and never edited on their own.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    /// Category name, exactly as it appears on the records
    pub name: String,

    /// Sum of the amounts of all counted records in this category
    pub total: Money,
}

impl CategoryAggregate {
    /// Start an aggregate with a zero total
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total: Money::zero(),
        }
    }

    /// Create an aggregate with a known total
    pub fn with_total(name: impl Into<String>, total: Money) -> Self {
        Self {
            name: name.into(),
            total,
        }
    }
}

impl fmt::Display for CategoryAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.total)
    }
}
