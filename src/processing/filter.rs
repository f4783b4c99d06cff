//! Delay threshold filtering for [`crate::types::ShipmentTable`].

use serde::Serialize;

use crate::types::{ShipmentRecord, ShipmentTable};

/// Threshold used when none is given: any positive delay counts as delayed.
pub const DEFAULT_DELAY_THRESHOLD: i64 = 0;

/// Returns the records whose delay strictly exceeds `threshold`, in table order.
///
/// A delay equal to the threshold is on time. The selection borrows from `table`.
pub fn delayed_shipments(table: &ShipmentTable, threshold: i64) -> Vec<&ShipmentRecord> {
    table.filter_records(|r| r.is_delayed(threshold))
}

/// Counts of delayed vs. on-time/early shipments for one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DelayBreakdown {
    pub threshold: i64,
    pub delayed: usize,
    pub on_time_or_early: usize,
}

impl DelayBreakdown {
    pub fn total(&self) -> usize {
        self.delayed + self.on_time_or_early
    }
}

/// Split the table into delayed and on-time/early counts.
pub fn partition_by_delay(table: &ShipmentTable, threshold: i64) -> DelayBreakdown {
    let delayed = delayed_shipments(table, threshold).len();
    DelayBreakdown {
        threshold,
        delayed,
        on_time_or_early: table.row_count() - delayed,
    }
}
