//! Snapshot serialization for the presentation layer
//!
//! Each snapshot is a compact JSON object describing one record or one
//! category aggregate. String fields go through `serde_json`, so embedded
//! quotes, backslashes and control characters are escaped. Amounts are JSON
//! numbers written with exactly two decimals (`10.50`, not `10.5`).

use serde::{Deserialize, Serialize};

use crate::error::LedgerResult;
use crate::models::{CategoryAggregate, ExpenseRecord, Money};
use crate::services::ExpenseStore;

/// Owned snapshot of one expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub date: String,
    pub category: String,
    #[serde(with = "two_decimals")]
    pub amount: Money,
    pub description: String,
}

impl RecordSnapshot {
    /// Encode as a single-line JSON object
    pub fn to_json(&self) -> LedgerResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a snapshot produced by [`RecordSnapshot::to_json`]
    pub fn from_json(json: &str) -> LedgerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&ExpenseRecord> for RecordSnapshot {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            date: record.date.clone(),
            category: record.category.clone(),
            amount: record.amount,
            description: record.description.clone(),
        }
    }
}

impl From<RecordSnapshot> for ExpenseRecord {
    fn from(snapshot: RecordSnapshot) -> Self {
        ExpenseRecord::new(
            snapshot.date,
            snapshot.category,
            snapshot.amount,
            snapshot.description,
        )
    }
}

/// Owned snapshot of one category aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSnapshot {
    pub name: String,
    #[serde(with = "two_decimals")]
    pub total: Money,
}

impl AggregateSnapshot {
    /// Encode as a single-line JSON object
    pub fn to_json(&self) -> LedgerResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a snapshot produced by [`AggregateSnapshot::to_json`]
    pub fn from_json(json: &str) -> LedgerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&CategoryAggregate> for AggregateSnapshot {
    fn from(aggregate: &CategoryAggregate) -> Self {
        Self {
            name: aggregate.name.clone(),
            total: aggregate.total,
        }
    }
}

/// Whole-ledger snapshot: every record, every aggregate and the totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub records: Vec<RecordSnapshot>,
    pub categories: Vec<AggregateSnapshot>,
    #[serde(with = "two_decimals")]
    pub grand_total: Money,
    pub record_count: usize,
    pub capacity: usize,
    /// Records left out of category totals by the category cap
    pub uncategorized_records: usize,
}

impl LedgerSnapshot {
    /// Capture the current state of `store`
    pub fn from_store(store: &ExpenseStore) -> Self {
        let records: Vec<RecordSnapshot> =
            store.records().iter().map(RecordSnapshot::from).collect();
        let categories = store
            .aggregates()
            .iter()
            .map(AggregateSnapshot::from)
            .collect();

        Self {
            record_count: records.len(),
            records,
            categories,
            grand_total: store.grand_total(),
            capacity: store.capacity(),
            uncategorized_records: store.dropped_category_contributions(),
        }
    }

    /// Encode as pretty-printed JSON
    pub fn to_json_pretty(&self) -> LedgerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Serialize the record at `index`
///
/// # Errors
///
/// `NotFound` when `index` is outside the current records.
pub fn serialize_record(store: &ExpenseStore, index: usize) -> LedgerResult<String> {
    let record = store.record_at(index)?;
    RecordSnapshot::from(&record).to_json()
}

/// Serialize the category aggregate at `index`
///
/// # Errors
///
/// `NotFound` when `index` is outside the current aggregates.
pub fn serialize_category_aggregate(store: &ExpenseStore, index: usize) -> LedgerResult<String> {
    let aggregate = store.aggregate_at(index)?;
    AggregateSnapshot::from(&aggregate).to_json()
}

impl ExpenseStore {
    /// Snapshot of the record at `index` as compact JSON
    pub fn serialize_record(&self, index: usize) -> LedgerResult<String> {
        serialize_record(self, index)
    }

    /// Snapshot of the category aggregate at `index` as compact JSON
    pub fn serialize_category_aggregate(&self, index: usize) -> LedgerResult<String> {
        serialize_category_aggregate(self, index)
    }
}

/// Money as a JSON number with exactly two decimals
mod two_decimals {
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::value::RawValue;

    use crate::models::Money;

    pub fn serialize<S: Serializer>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(amount.to_decimal_string()).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_major(value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> ExpenseStore {
        let mut store = ExpenseStore::default();
        store
            .add("2025-03-21", "Food", Money::from_cents(1050), "Lunch")
            .unwrap();
        store
            .add("2025-03-21", "Transport", Money::from_cents(500), "Bus")
            .unwrap();
        store
            .add("2025-03-22", "Food", Money::from_cents(725), "Snack")
            .unwrap();
        store
    }

    #[test]
    fn test_serialize_record_format() {
        let store = sample_store();
        assert_eq!(
            store.serialize_record(0).unwrap(),
            r#"{"date":"2025-03-21","category":"Food","amount":10.50,"description":"Lunch"}"#
        );
        assert_eq!(
            serialize_record(&store, 1).unwrap(),
            r#"{"date":"2025-03-21","category":"Transport","amount":5.00,"description":"Bus"}"#
        );
    }

    #[test]
    fn test_serialize_aggregate_format() {
        let store = sample_store();
        assert_eq!(
            store.serialize_category_aggregate(0).unwrap(),
            r#"{"name":"Food","total":17.75}"#
        );
        assert_eq!(
            store.serialize_category_aggregate(1).unwrap(),
            r#"{"name":"Transport","total":5.00}"#
        );
    }

    #[test]
    fn test_serialize_out_of_range() {
        let store = sample_store();
        assert!(store.serialize_record(3).unwrap_err().is_not_found());
        assert!(store.serialize_category_aggregate(2).unwrap_err().is_not_found());
        assert!(ExpenseStore::default().serialize_record(0).is_err());
    }

    #[test]
    fn test_structural_characters_are_escaped() {
        let mut store = ExpenseStore::default();
        store
            .add(
                "2025-03-23",
                r#"Books "rare""#,
                Money::from_cents(-399),
                "line one\nback\\slash",
            )
            .unwrap();

        let json = store.serialize_record(0).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2025-03-23","category":"Books \"rare\"","amount":-3.99,"description":"line one\nback\\slash"}"#
        );

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["category"], r#"Books "rare""#);

        let decoded = RecordSnapshot::from_json(&json).unwrap();
        assert_eq!(ExpenseRecord::from(decoded), store.record_at(0).unwrap());
    }

    #[test]
    fn test_aggregate_snapshot_decodes() {
        let decoded = AggregateSnapshot::from_json(r#"{"name":"Food","total":17.75}"#).unwrap();
        assert_eq!(decoded.total, Money::from_cents(1775));
        assert_eq!(decoded.name, "Food");
    }

    #[test]
    fn test_ledger_snapshot() {
        let mut store = sample_store();
        store.delete_at(1).unwrap();

        let snapshot = LedgerSnapshot::from_store(&store);
        assert_eq!(snapshot.record_count, 2);
        assert_eq!(snapshot.capacity, 100);
        assert_eq!(snapshot.grand_total, Money::from_cents(1775));
        assert_eq!(snapshot.categories.len(), 1);
        assert_eq!(snapshot.uncategorized_records, 0);

        let json = snapshot.to_json_pretty().unwrap();
        assert!(json.contains("\"grand_total\": 17.75"));
        let back: LedgerSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
