//! Observed load entrypoint.
//!
//! Most callers should use [`ingest_from_path`], which loads a shipment file into an in-memory
//! [`crate::types::ShipmentTable`]. If an [`super::observability::IngestionObserver`] is set in
//! [`IngestionOptions`], success/failure/alerts are reported to it.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{IngestionError, IngestionResult};
use crate::types::ShipmentTable;

use super::csv::{DEFAULT_DELIMITER, ingest_csv_from_path_with_delimiter};
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};

/// Options controlling how a shipment file is loaded.
///
/// Use [`Default`] for comma-delimited files without logging.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("delimiter", &char::from(self.delimiter))
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Load a shipment CSV file, reporting the outcome to the configured observer.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with shipment/airline counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// The error itself is always returned to the caller.
///
/// ```no_run
/// use std::sync::Arc;
///
/// use air_cargo_delays::ingestion::{ingest_from_path, IngestionOptions, StdErrObserver};
///
/// # fn main() -> Result<(), air_cargo_delays::IngestionError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     ..Default::default()
/// };
/// let table = ingest_from_path("data/cargo_data.csv", &opts)?;
/// println!("shipments={}", table.row_count());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(
    path: impl AsRef<Path>,
    options: &IngestionOptions,
) -> IngestionResult<ShipmentTable> {
    let path = path.as_ref();
    let result = ingest_csv_from_path_with_delimiter(path, options.delimiter);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = IngestionContext {
            path: path.to_path_buf(),
        };
        match &result {
            Ok(table) => obs.on_success(&ctx, stats_for(table)),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn stats_for(table: &ShipmentTable) -> IngestionStats {
    let airlines: HashSet<&str> = table.iter().map(|r| r.airline.as_str()).collect();
    IngestionStats {
        rows: table.row_count(),
        airlines: airlines.len(),
    }
}

fn severity_for_error(e: &IngestionError) -> IngestionSeverity {
    match e {
        IngestionError::Io(_) => IngestionSeverity::Critical,
        IngestionError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        IngestionError::SchemaMismatch { .. } => IngestionSeverity::Error,
        IngestionError::ParseError { .. } => IngestionSeverity::Error,
    }
}
