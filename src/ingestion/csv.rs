//! CSV ingestion implementation.

use std::fs::File;
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{REQUIRED_COLUMNS, ShipmentRecord, ShipmentTable};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Ingest a shipment CSV file into an in-memory [`ShipmentTable`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain every column in [`REQUIRED_COLUMNS`] (order can differ, extra columns
///   are ignored).
/// - `delay_minutes` is parsed as a signed base-10 integer; every other field is kept exactly as
///   read.
/// - Rows are neither skipped nor reordered. Rows may be longer or shorter than the header:
///   extra fields are ignored, missing text fields are empty, and a missing delay is a
///   [`IngestionError::ParseError`].
/// - Required columns are only enforced once a data row exists; a header-only file always loads
///   as an empty table.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> IngestionResult<ShipmentTable> {
    ingest_csv_from_path_with_delimiter(path, DEFAULT_DELIMITER)
}

/// Same as [`ingest_csv_from_path`], with an explicit field delimiter.
pub fn ingest_csv_from_path_with_delimiter(
    path: impl AsRef<Path>,
    delimiter: u8,
) -> IngestionResult<ShipmentTable> {
    // Open separately so a missing file surfaces as `IngestionError::Io`.
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(file);
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest shipment CSV data from an existing CSV reader.
///
/// Build the reader with `flexible(true)` to accept rows whose length differs from the header;
/// otherwise such rows fail with [`IngestionError::Csv`].
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> IngestionResult<ShipmentTable> {
    let headers = rdr.headers()?.clone();

    // Resolved lazily: a file without data rows loads regardless of its header.
    let mut col_idxs: Option<[usize; REQUIRED_COLUMNS.len()]> = None;

    let mut records = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        let [id_idx, airline_idx, origin_idx, destination_idx, delay_idx] = match col_idxs {
            Some(idxs) => idxs,
            None => *col_idxs.insert(column_indexes(&headers)?),
        };
        let field = |idx: usize| record.get(idx).unwrap_or("");

        records.push(ShipmentRecord {
            shipment_id: field(id_idx).to_owned(),
            airline: field(airline_idx).to_owned(),
            origin: field(origin_idx).to_owned(),
            destination: field(destination_idx).to_owned(),
            delay_minutes: parse_delay(user_row, field(delay_idx))?,
        });
    }

    Ok(ShipmentTable::new(records))
}

/// Map required columns -> CSV column indexes (allows re-ordered CSV columns).
fn column_indexes(headers: &csv::StringRecord) -> IngestionResult<[usize; REQUIRED_COLUMNS.len()]> {
    let mut idxs = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in idxs.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IngestionError::SchemaMismatch {
                message: format!(
                    "missing required column '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            })?;
    }
    Ok(idxs)
}

fn parse_delay(row: usize, raw: &str) -> IngestionResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| IngestionError::ParseError {
            row,
            column: "delay_minutes".to_owned(),
            raw: raw.to_owned(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::parse_delay;
    use crate::error::IngestionError;

    #[test]
    fn parse_delay_accepts_signs_and_padding() {
        assert_eq!(parse_delay(2, "15").unwrap(), 15);
        assert_eq!(parse_delay(2, "-7").unwrap(), -7);
        assert_eq!(parse_delay(2, "+3").unwrap(), 3);
        assert_eq!(parse_delay(2, " 42 ").unwrap(), 42);
    }

    #[test]
    fn parse_delay_is_limited_to_i64() {
        assert_eq!(parse_delay(2, "-9223372036854775808").unwrap(), i64::MIN);
        assert!(matches!(
            parse_delay(2, "9223372036854775808"),
            Err(IngestionError::ParseError { row: 2, .. })
        ));
    }

    #[test]
    fn parse_delay_rejects_non_integers() {
        for raw in ["", "1.5", "ten", "0x10"] {
            match parse_delay(7, raw) {
                Err(IngestionError::ParseError { row, column, .. }) => {
                    assert_eq!(row, 7);
                    assert_eq!(column, "delay_minutes");
                }
                other => panic!("expected parse error for {raw:?}, got {other:?}"),
            }
        }
    }
}
