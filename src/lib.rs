//! `air-cargo-delays` loads a CSV file of air cargo shipment records into an in-memory
//! [`types::ShipmentTable`] and computes delay statistics over it.
//!
//! The primary entrypoint is [`ingestion::ingest_from_path`], followed by the read-only queries in
//! [`processing`] or a complete [`report::DelayReport`].
//!
//! ## Input format
//!
//! UTF-8, comma-delimited, with a header row naming at least these columns (any order, extra
//! columns ignored):
//!
//! | column          | type                                     |
//! |-----------------|------------------------------------------|
//! | `shipment_id`   | text                                     |
//! | `airline`       | text (short code, e.g. `AF`)             |
//! | `origin`        | text                                     |
//! | `destination`   | text                                     |
//! | `delay_minutes` | signed 64-bit integer (negative = early) |
//!
//! Text columns are kept exactly as read. A `delay_minutes` value that is not an integer, or that
//! lies outside the `i64` range (`-9223372036854775808..=9223372036854775807`), fails the whole
//! load with [`IngestionError::ParseError`]. Rows longer than the header are accepted (extra fields
//! ignored); in shorter rows missing text fields are empty and a missing delay fails the load.
//!
//! ## Quick example
//!
//! ```no_run
//! use air_cargo_delays::ingestion::{ingest_from_path, IngestionOptions};
//! use air_cargo_delays::report::{DelayReport, ReportOptions};
//!
//! # fn main() -> Result<(), air_cargo_delays::IngestionError> {
//! let table = ingest_from_path("data/cargo_data.csv", &IngestionOptions::default())?;
//! let report = DelayReport::build("data/cargo_data.csv", &table, &ReportOptions::default());
//! print!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: loading shipment files, with optional observers for logging/alerts
//! - [`types`]: shipment record + table types
//! - [`processing`]: aggregate queries (stats, threshold filter, per-airline stats, sample)
//! - [`report`]: text/JSON report assembly
//! - [`error`]: error types used by loading

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{IngestionError, IngestionResult};
