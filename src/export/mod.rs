//! Export functionality
//!
//! Snapshot encodings handed to the presentation layer. Every snapshot is an
//! owned value; nothing returned here aliases the store.

pub mod snapshot;

pub use snapshot::{
    serialize_category_aggregate, serialize_record, AggregateSnapshot, LedgerSnapshot,
    RecordSnapshot,
};
