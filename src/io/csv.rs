//! Delimited-text reading and writing
//!
//! Input files are comma-delimited with a header row naming the four
//! required columns (case- and whitespace-insensitive). Fields
//! containing the delimiter or quote character follow standard CSV
//! quoting rules. Output is UTF-8, header included, no index column.

use crate::domain::{RecordSet, Result, VeilError, REQUIRED_COLUMNS};
use std::path::Path;

/// Read a record set from a CSV file
///
/// Fails with a descriptive error if the file is missing, malformed,
/// or lacks any of the required columns. Header names are normalized
/// (trimmed, lowercased) by [`RecordSet::new`].
pub fn read_records(path: &Path) -> Result<RecordSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| {
            VeilError::InputFormat(format!("failed to open {}: {e}", path.display()))
        })?;

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let records = RecordSet::new(columns, rows)?;
    for column in REQUIRED_COLUMNS {
        records.require_column(column)?;
    }

    tracing::info!(
        path = %path.display(),
        rows = records.row_count(),
        "Read input records"
    );
    Ok(records)
}

/// Write a record set to a CSV file
///
/// Emits the header row followed by every data row in order. Quoting
/// is applied automatically where fields require it.
pub fn write_records(records: &RecordSet, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_path(path).map_err(|e| {
        VeilError::Io(format!("failed to create {}: {e}", path.display()))
    })?;

    writer.write_record(records.columns())?;
    for row in records.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;

    tracing::info!(
        path = %path.display(),
        rows = records.row_count(),
        "Wrote output records"
    );
    Ok(())
}
