//! Per-airline grouped statistics.

use serde::Serialize;

use crate::types::ShipmentTable;

/// Delay statistics for a single airline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirlineStats {
    pub airline: String,
    pub count: usize,
    pub avg_delay: f64,
}

/// Stats over records whose airline equals `airline_code` exactly (case-sensitive).
///
/// Returns `None` if no record matches.
pub fn airline_stats(table: &ShipmentTable, airline_code: &str) -> Option<AirlineStats> {
    let (count, total) = table.reduce_records((0usize, 0i128), |(n, sum), r| {
        if r.airline == airline_code {
            (n + 1, sum + i128::from(r.delay_minutes))
        } else {
            (n, sum)
        }
    });

    if count == 0 {
        return None;
    }
    Some(AirlineStats {
        airline: airline_code.to_owned(),
        count,
        avg_delay: total as f64 / count as f64,
    })
}

/// Stats for every airline in the table, ordered by first appearance.
pub fn airline_breakdown(table: &ShipmentTable) -> Vec<AirlineStats> {
    let mut groups: Vec<(&str, usize, i128)> = Vec::new();
    for r in table {
        match groups.iter_mut().find(|(code, _, _)| *code == r.airline) {
            Some((_, n, sum)) => {
                *n += 1;
                *sum += i128::from(r.delay_minutes);
            }
            None => groups.push((r.airline.as_str(), 1, i128::from(r.delay_minutes))),
        }
    }

    groups
        .into_iter()
        .map(|(code, count, total)| AirlineStats {
            airline: code.to_owned(),
            count,
            avg_delay: total as f64 / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{airline_breakdown, airline_stats};
    use crate::types::{ShipmentRecord, ShipmentTable};

    fn example_table() -> ShipmentTable {
        ShipmentTable::new(vec![
            ShipmentRecord::new("1", "A", "CDG", "JFK", 5),
            ShipmentRecord::new("2", "A", "CDG", "JFK", -2),
            ShipmentRecord::new("3", "B", "AMS", "ORD", 20),
        ])
    }

    #[test]
    fn airline_stats_counts_and_averages_matches() {
        let stats = airline_stats(&example_table(), "A").unwrap();
        assert_eq!(stats.airline, "A");
        assert_eq!(stats.count, 2);
        assert_eq!(stats.avg_delay, 1.5);
    }

    #[test]
    fn airline_match_is_exact() {
        let table = example_table();
        assert_eq!(airline_stats(&table, "a"), None);
        assert_eq!(airline_stats(&table, "A "), None);
        assert_eq!(airline_stats(&table, "DL"), None);
    }

    #[test]
    fn airline_stats_is_none_for_empty_table() {
        assert_eq!(airline_stats(&ShipmentTable::default(), "AF"), None);
    }

    #[test]
    fn breakdown_keeps_first_seen_order() {
        let mut records = example_table().records().to_vec();
        records.push(ShipmentRecord::new("4", "A", "CDG", "MIA", 9));
        let out = airline_breakdown(&ShipmentTable::new(records));

        let codes: Vec<&str> = out.iter().map(|s| s.airline.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
        assert_eq!(out[0].count, 3);
        assert_eq!(out[0].avg_delay, 4.0);
        assert_eq!(out[1].count, 1);
        assert_eq!(out[1].avg_delay, 20.0);
    }

    #[test]
    fn breakdown_agrees_with_single_airline_query() {
        let table = example_table();
        for group in airline_breakdown(&table) {
            assert_eq!(airline_stats(&table, &group.airline), Some(group));
        }
    }
}
