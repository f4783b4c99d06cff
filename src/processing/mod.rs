//! Read-only aggregate queries over a [`crate::types::ShipmentTable`].
//!
//! Every function here borrows the table and returns a fresh value; nothing mutates its input.
//! "No data" (empty table, unknown airline) is returned as `None`, never as an error.
//!
//! - [`overall_stats()`]: count/min/max/mean delay
//! - [`delayed_shipments()`] / [`partition_by_delay()`]: threshold filter (strictly greater)
//! - [`airline_stats()`] / [`airline_breakdown()`]: per-airline grouped stats
//! - [`sample()`]: first N records
//! - [`reduce()`]: single delay reductions (count/sum/min/max)
//!
//! ## Example
//!
//! ```rust
//! use air_cargo_delays::processing::{airline_stats, delayed_shipments, overall_stats};
//! use air_cargo_delays::types::{ShipmentRecord, ShipmentTable};
//!
//! let table = ShipmentTable::new(vec![
//!     ShipmentRecord::new("S1", "AF", "CDG", "JFK", 5),
//!     ShipmentRecord::new("S2", "AF", "CDG", "ORD", -2),
//!     ShipmentRecord::new("S3", "KL", "AMS", "LAX", 20),
//! ]);
//!
//! let stats = overall_stats(&table).unwrap();
//! assert_eq!((stats.count, stats.min_delay, stats.max_delay), (3, -2, 20));
//!
//! assert_eq!(delayed_shipments(&table, 0).len(), 2);
//! assert_eq!(airline_stats(&table, "AF").unwrap().avg_delay, 1.5);
//! assert!(airline_stats(&table, "DL").is_none());
//! ```

pub mod filter;
pub mod group;
pub mod reduce;
pub mod sample;
pub mod verdict;

pub use filter::{DEFAULT_DELAY_THRESHOLD, DelayBreakdown, delayed_shipments, partition_by_delay};
pub use group::{AirlineStats, airline_breakdown, airline_stats};
pub use reduce::{DelayStats, ReduceOp, delay_stats, overall_stats, reduce};
pub use sample::{DEFAULT_SAMPLE_LIMIT, sample};
pub use verdict::PerformanceVerdict;
