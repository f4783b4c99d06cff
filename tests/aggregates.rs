use air_cargo_delays::ingestion::{IngestionOptions, ingest_from_path};
use air_cargo_delays::processing::{
    PerformanceVerdict, airline_breakdown, airline_stats, delayed_shipments, overall_stats, partition_by_delay,
    sample,
};
use air_cargo_delays::report::{DelayReport, ReportOptions};
use air_cargo_delays::types::ShipmentTable;

fn bundled() -> ShipmentTable {
    ingest_from_path("data/cargo_data.csv", &IngestionOptions::default()).unwrap()
}

#[test]
fn worked_example_from_fixture() {
    let table = ingest_from_path("tests/fixtures/shipments.csv", &IngestionOptions::default()).unwrap();

    let stats = overall_stats(&table).unwrap();
    assert_eq!((stats.count, stats.min_delay, stats.max_delay), (3, -2, 20));
    assert!((stats.avg_delay - 23.0 / 3.0).abs() < 1e-9);

    let a = airline_stats(&table, "A").unwrap();
    assert_eq!((a.count, a.avg_delay), (2, 1.5));

    let delayed: Vec<i64> = delayed_shipments(&table, 0).iter().map(|r| r.delay_minutes).collect();
    assert_eq!(delayed, vec![5, 20]);
    assert_eq!(partition_by_delay(&table, 0).on_time_or_early, 1);

    assert_eq!(sample(&table, 5), table.records());
}

#[test]
fn stats_invariants_on_bundled_data() {
    let table = bundled();
    let stats = overall_stats(&table).unwrap();

    assert_eq!(stats.count, table.row_count());
    assert!(stats.min_delay as f64 <= stats.avg_delay);
    assert!(stats.avg_delay <= stats.max_delay as f64);
    assert_eq!(PerformanceVerdict::from_average(stats.avg_delay), PerformanceVerdict::Moderate);
}

#[test]
fn airline_breakdown_sums_to_table() {
    let table = bundled();
    let groups = airline_breakdown(&table);

    let codes: Vec<&str> = groups.iter().map(|g| g.airline.as_str()).collect();
    assert_eq!(codes, vec!["AF", "KL", "DL", "LH"]);
    assert_eq!(groups.iter().map(|g| g.count).sum::<usize>(), table.row_count());

    for g in &groups {
        let expected = table.iter().filter(|r| r.airline == g.airline).count();
        assert_eq!(g.count, expected);
    }
}

#[test]
fn partition_for_several_thresholds() {
    let table = bundled();
    for threshold in [-100, -5, 0, 10, 59, 60] {
        let split = partition_by_delay(&table, threshold);
        assert_eq!(split.total(), table.row_count());
        assert_eq!(split.delayed, delayed_shipments(&table, threshold).len());
    }
    assert_eq!(partition_by_delay(&table, 60).delayed, 0);
}

#[test]
fn report_over_empty_table() {
    let table = ingest_from_path("tests/fixtures/header_only.csv", &IngestionOptions::default()).unwrap();
    let report = DelayReport::build("tests/fixtures/header_only.csv", &table, &ReportOptions::default());

    assert_eq!(report.total_shipments, 0);
    assert!(report.overall.is_none());
    assert!(report.airlines.is_empty());
    assert_eq!(report.breakdown.total(), 0);
}
