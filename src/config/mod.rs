//! Configuration module for the budget planner
//!
//! This module provides:
//! - Settings file location
//! - Ledger limits and presentation preferences

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{Settings, StoreLimits};
