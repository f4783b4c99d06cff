//! Bounded sampling.

use crate::types::{ShipmentRecord, ShipmentTable};

/// Default number of sample rows shown in a report.
pub const DEFAULT_SAMPLE_LIMIT: usize = 5;

/// The first `limit` records in table order (fewer if the table is shorter).
pub fn sample(table: &ShipmentTable, limit: usize) -> &[ShipmentRecord] {
    let records = table.records();
    &records[..limit.min(records.len())]
}

#[cfg(test)]
mod tests {
    use super::sample;
    use crate::types::{ShipmentRecord, ShipmentTable};

    fn three_rows() -> ShipmentTable {
        ShipmentTable::new(vec![
            ShipmentRecord::new("1", "AF", "CDG", "JFK", 5),
            ShipmentRecord::new("2", "KL", "AMS", "ORD", -2),
            ShipmentRecord::new("3", "DL", "ATL", "CDG", 20),
        ])
    }

    #[test]
    fn limit_larger_than_table_returns_everything() {
        let table = three_rows();
        let out = sample(&table, 5);
        assert_eq!(out, table.records());
    }

    #[test]
    fn limit_truncates_in_order() {
        let table = three_rows();
        let ids: Vec<&str> = sample(&table, 2).iter().map(|r| r.shipment_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn zero_limit_or_empty_table_is_empty() {
        assert!(sample(&three_rows(), 0).is_empty());
        assert!(sample(&ShipmentTable::default(), 5).is_empty());
    }
}
