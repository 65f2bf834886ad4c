use crate::Error;
use csv::StringRecord;

/// Finds the position of a named column within a CSV header row.
pub fn column_index(headers: &StringRecord, column: &str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| Error::MissingColumn(column.to_string()))
}
