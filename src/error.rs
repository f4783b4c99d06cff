use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned when loading a shipment file.
///
/// Every variant is fatal to a load; no partially loaded table is ever returned.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV structure (e.g. a row with a different field count than the header).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The header does not name every required shipment column.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A `delay_minutes` value is not a base-10 integer.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

impl IngestionError {
    /// File row (1-based, header = row 1) and column of a value-level failure.
    pub fn location(&self) -> Option<(usize, &str)> {
        match self {
            Self::ParseError { row, column, .. } => Some((*row, column.as_str())),
            _ => None,
        }
    }
}
