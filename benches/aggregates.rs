use criterion::{Criterion, black_box, criterion_group, criterion_main};

use air_cargo_delays::processing::{airline_breakdown, airline_stats, overall_stats, partition_by_delay};
use air_cargo_delays::types::{ShipmentRecord, ShipmentTable};

const AIRLINES: [&str; 6] = ["AF", "KL", "DL", "LH", "BA", "UA"];

fn synthetic_table(rows: usize) -> ShipmentTable {
    let records = (0..rows)
        .map(|i| {
            let delay = (i as i64 * 37) % 121 - 30;
            ShipmentRecord::new(
                format!("SHP{i:07}"),
                AIRLINES[i % AIRLINES.len()],
                "CDG",
                "JFK",
                delay,
            )
        })
        .collect();
    ShipmentTable::new(records)
}

fn bench_aggregates(c: &mut Criterion) {
    let table = synthetic_table(100_000);

    c.bench_function("overall_stats_100k", |b| b.iter(|| overall_stats(black_box(&table))));
    c.bench_function("partition_by_delay_100k", |b| {
        b.iter(|| partition_by_delay(black_box(&table), 0))
    });
    c.bench_function("airline_stats_100k", |b| b.iter(|| airline_stats(black_box(&table), "KL")));
    c.bench_function("airline_breakdown_100k", |b| b.iter(|| airline_breakdown(black_box(&table))));
}

criterion_group!(benches, bench_aggregates);
criterion_main!(benches);
