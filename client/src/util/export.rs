//! CSV and JSON rendering for the export page.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use serde::Serialize;

use super::table::TableRow;
use crate::error::ClientError;

/// Render rows as RFC 4180 CSV: header line first, CRLF line endings,
/// fields quoted only when they need it.
///
/// # Errors
///
/// Returns [`ClientError::Validation`] if the writer fails.
pub fn to_csv<T: TableRow>(rows: &[T]) -> Result<String, ClientError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    let columns = T::columns();
    writer.write_record(columns).map_err(csv_error)?;
    for row in rows {
        writer
            .write_record(columns.iter().map(|c| row.cell(c)))
            .map_err(csv_error)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ClientError::Validation(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ClientError::Validation(e.to_string()))
}

/// Pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`ClientError::Validation`] if serialization fails.
pub fn to_json<T: Serialize>(rows: &[T]) -> Result<String, ClientError> {
    serde_json::to_string_pretty(rows).map_err(|e| ClientError::Validation(e.to_string()))
}

fn csv_error(err: csv::Error) -> ClientError {
    ClientError::Validation(err.to_string())
}
