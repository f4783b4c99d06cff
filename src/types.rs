//! Core data model types.
//!
//! Loading produces a [`ShipmentTable`]: an ordered, read-only sequence of typed
//! [`ShipmentRecord`]s in the same order as the rows of the source file.

use serde::Serialize;

/// Column names every shipment file must provide (in any order).
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "shipment_id",
    "airline",
    "origin",
    "destination",
    "delay_minutes",
];

/// One row of cargo tracking data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipmentRecord {
    /// Shipment identifier, kept exactly as read.
    pub shipment_id: String,
    /// Airline short code (e.g. `AF`).
    pub airline: String,
    /// Origin airport.
    pub origin: String,
    /// Destination airport.
    pub destination: String,
    /// Delay in minutes. Positive = late, negative = early, zero = on time.
    ///
    /// Values outside the `i64` range are rejected at load time.
    pub delay_minutes: i64,
}

impl ShipmentRecord {
    /// Create a new record.
    pub fn new(
        shipment_id: impl Into<String>,
        airline: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        delay_minutes: i64,
    ) -> Self {
        Self {
            shipment_id: shipment_id.into(),
            airline: airline.into(),
            origin: origin.into(),
            destination: destination.into(),
            delay_minutes,
        }
    }

    /// Returns `true` if the delay strictly exceeds `threshold`.
    ///
    /// A delay equal to the threshold counts as on time.
    pub fn is_delayed(&self, threshold: i64) -> bool {
        self.delay_minutes > threshold
    }
}

/// In-memory shipment table.
///
/// Records are stored in source-file row order and never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipmentTable {
    records: Vec<ShipmentRecord>,
}

impl ShipmentTable {
    /// Create a table from records (order is preserved).
    pub fn new(records: Vec<ShipmentRecord>) -> Self {
        Self { records }
    }

    /// All records, in source order.
    pub fn records(&self) -> &[ShipmentRecord] {
        &self.records
    }

    /// Number of records in the table.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShipmentRecord> {
        self.records.iter()
    }

    /// Select the records matching `predicate`, preserving order.
    ///
    /// The selection borrows from the table; no field values are copied.
    pub fn filter_records<F>(&self, mut predicate: F) -> Vec<&ShipmentRecord>
    where
        F: FnMut(&ShipmentRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Reduce (fold) all records into an accumulator value.
    pub fn reduce_records<A, F>(&self, init: A, reducer: F) -> A
    where
        F: FnMut(A, &ShipmentRecord) -> A,
    {
        self.records.iter().fold(init, reducer)
    }
}

impl<'a> IntoIterator for &'a ShipmentTable {
    type Item = &'a ShipmentRecord;
    type IntoIter = std::slice::Iter<'a, ShipmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl From<Vec<ShipmentRecord>> for ShipmentTable {
    fn from(records: Vec<ShipmentRecord>) -> Self {
        Self::new(records)
    }
}
