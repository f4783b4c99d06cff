//! Delay reductions and whole-table statistics.

use serde::Serialize;

use crate::types::{ShipmentRecord, ShipmentTable};

/// Built-in reduction operations over `delay_minutes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all records.
    Count,
    /// Sum of delays.
    Sum,
    /// Minimum delay.
    Min,
    /// Maximum delay.
    Max,
}

/// Reduce the delays of `records` using a built-in [`ReduceOp`].
///
/// - `Count` always returns `Some(n)`, including `Some(0)` for no records.
/// - `Sum`/`Min`/`Max` return `None` if there are no records.
/// - `Sum` also returns `None` if the total leaves the `i64` range.
pub fn reduce<'a, I>(records: I, op: ReduceOp) -> Option<i64>
where
    I: IntoIterator<Item = &'a ShipmentRecord>,
{
    let delays = records.into_iter().map(|r| r.delay_minutes);
    match op {
        ReduceOp::Count => Some(delays.count() as i64),
        ReduceOp::Sum => {
            let mut delays = delays.peekable();
            delays.peek()?;
            delays.try_fold(0i64, i64::checked_add)
        }
        ReduceOp::Min => delays.min(),
        ReduceOp::Max => delays.max(),
    }
}

/// Whole-table delay statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DelayStats {
    pub count: usize,
    pub min_delay: i64,
    pub max_delay: i64,
    pub avg_delay: f64,
}

/// Count/min/max/mean over the table, or `None` for an empty table.
pub fn overall_stats(table: &ShipmentTable) -> Option<DelayStats> {
    delay_stats(table)
}

/// Count/min/max/mean over any selection of records (e.g. the output of a filter).
pub fn delay_stats<'a, I>(records: I) -> Option<DelayStats>
where
    I: IntoIterator<Item = &'a ShipmentRecord>,
{
    let mut iter = records.into_iter();
    let first = iter.next()?.delay_minutes;

    let (count, min_delay, max_delay, total) = iter.fold(
        (1usize, first, first, i128::from(first)),
        |(n, lo, hi, sum), r| {
            let d = r.delay_minutes;
            (n + 1, lo.min(d), hi.max(d), sum + i128::from(d))
        },
    );

    Some(DelayStats {
        count,
        min_delay,
        max_delay,
        avg_delay: total as f64 / count as f64,
    })
}
