//! Expense store
//!
//! Owns the ordered, capacity-bounded collection of expense records together
//! with the category aggregates derived from it. Every successful mutation
//! rebuilds the aggregates and then fires the refresh hook, all before the
//! call returns.

use std::fmt;

use tracing::debug;

use super::aggregate::{AggregateCalculator, Aggregation};
use super::notify::RefreshHook;
use crate::config::StoreLimits;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{CategoryAggregate, ExpenseRecord, Money};

/// In-memory expense ledger
///
/// Readers only ever receive copies of records and aggregates.
pub struct ExpenseStore {
    records: Vec<ExpenseRecord>,
    aggregation: Aggregation,
    limits: StoreLimits,
    calculator: AggregateCalculator,
    refresh_hook: Option<Box<dyn RefreshHook>>,
}

impl ExpenseStore {
    /// Create an empty store with the given limits
    pub fn new(limits: StoreLimits) -> Self {
        Self {
            records: Vec::new(),
            aggregation: Aggregation::default(),
            calculator: AggregateCalculator::new(limits.max_categories),
            limits,
            refresh_hook: None,
        }
    }

    /// Install the hook fired after each successful mutation
    pub fn with_refresh_hook(mut self, hook: impl RefreshHook + 'static) -> Self {
        self.set_refresh_hook(hook);
        self
    }

    /// Replace the refresh hook
    pub fn set_refresh_hook(&mut self, hook: impl RefreshHook + 'static) {
        self.refresh_hook = Some(Box::new(hook));
    }

    /// Remove the refresh hook
    pub fn clear_refresh_hook(&mut self) {
        self.refresh_hook = None;
    }

    // === Mutations ===

    /// Append an expense to the end of the ledger
    ///
    /// String fields longer than the configured limit are truncated silently.
    /// Returns the index of the new record.
    ///
    /// # Errors
    ///
    /// `CapacityExhausted` when the store is full, `TotalOutOfRange` when the
    /// amount would push a total past the `Money` range. Either way the store
    /// is left unchanged.
    pub fn add(
        &mut self,
        date: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> LedgerResult<usize> {
        self.add_record(ExpenseRecord::new(date, category, amount, description))
    }

    /// Append an already-built record
    pub fn add_record(&mut self, record: ExpenseRecord) -> LedgerResult<usize> {
        if self.is_full() {
            return Err(LedgerError::CapacityExhausted {
                capacity: self.limits.max_records,
            });
        }

        let record = record.truncated(self.limits.max_field_chars);
        let aggregation = self
            .calculator
            .try_recompute(self.records.iter().chain(std::iter::once(&record)))?;

        debug!(
            category = %record.category,
            amount = %record.amount,
            "adding expense"
        );
        self.records.push(record);

        self.commit(aggregation);
        Ok(self.records.len() - 1)
    }

    /// Remove the record at `index`, shifting later records one place earlier
    ///
    /// Returns the removed record.
    ///
    /// # Errors
    ///
    /// `InvalidIndex` when `index` is outside `[0, count)`. `TotalOutOfRange`
    /// when the remaining records would no longer sum within range, which only
    /// happens once a negative amount has offset larger ones. The store is left
    /// unchanged on error.
    pub fn delete_at(&mut self, index: usize) -> LedgerResult<ExpenseRecord> {
        if index >= self.records.len() {
            return Err(LedgerError::InvalidIndex {
                index,
                count: self.records.len(),
            });
        }

        let remaining = self
            .records
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, record)| record);
        let aggregation = self.calculator.try_recompute(remaining)?;

        // Vec::remove keeps the relative order of the remaining records
        let removed = self.records.remove(index);
        debug!(index, remaining = self.records.len(), "deleted expense");

        self.commit(aggregation);
        Ok(removed)
    }

    /// Empty the ledger and its aggregates
    ///
    /// Always succeeds and always notifies, even when already empty.
    pub fn clear(&mut self) {
        debug!(discarded = self.records.len(), "clearing all expenses");
        self.records.clear();
        self.aggregation = Aggregation::default();
        self.notify();
    }

    // === Record queries ===

    /// Number of stored records
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Maximum number of records
    pub fn capacity(&self) -> usize {
        self.limits.max_records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.limits.max_records
    }

    /// Copy of the record at `index`
    pub fn record_at(&self, index: usize) -> LedgerResult<ExpenseRecord> {
        self.records
            .get(index)
            .cloned()
            .ok_or_else(|| LedgerError::record_not_found(index))
    }

    /// Copies of all records in display order
    pub fn records(&self) -> Vec<ExpenseRecord> {
        self.records.clone()
    }

    /// Sum of all record amounts
    pub fn grand_total(&self) -> Money {
        self.aggregation.grand_total
    }

    // === Aggregate queries ===

    /// Number of category aggregates
    pub fn category_count(&self) -> usize {
        self.aggregation.aggregates.len()
    }

    /// Copy of the aggregate at `index`
    pub fn aggregate_at(&self, index: usize) -> LedgerResult<CategoryAggregate> {
        self.aggregation
            .aggregates
            .get(index)
            .cloned()
            .ok_or_else(|| LedgerError::aggregate_not_found(index))
    }

    /// Copies of all category aggregates in first-seen order
    pub fn aggregates(&self) -> Vec<CategoryAggregate> {
        self.aggregation.aggregates.clone()
    }

    /// Records left out of the category totals by the category cap
    pub fn dropped_category_contributions(&self) -> usize {
        self.aggregation.dropped_records
    }

    fn commit(&mut self, aggregation: Aggregation) {
        self.aggregation = aggregation;
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(hook) = self.refresh_hook.as_mut() {
            hook.refresh();
        }
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new(StoreLimits::default())
    }
}

impl fmt::Debug for ExpenseStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpenseStore")
            .field("records", &self.records)
            .field("aggregation", &self.aggregation)
            .field("limits", &self.limits)
            .field("has_refresh_hook", &self.refresh_hook.is_some())
            .finish()
    }
}
