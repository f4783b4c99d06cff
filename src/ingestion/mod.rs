//! Loading shipment files.
//!
//! Most callers should use [`ingest_from_path`] (from [`loader`]) which:
//!
//! - reads a delimited shipment file into an in-memory [`crate::types::ShipmentTable`]
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! The unobserved CSV functions are available under [`csv`].

pub mod csv;
pub mod loader;
pub mod observability;

pub use loader::{IngestionOptions, ingest_from_path};
pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    StdErrObserver,
};
