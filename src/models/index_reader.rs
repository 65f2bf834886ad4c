use crate::constants::INDEX_HEADER;
use crate::models::IndexRow;
use crate::utils::{column_index, open_csv_source};
use crate::Error;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

/// Reads an index artifact (optionally gzip compressed) back into rows.
pub fn read_index_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<IndexRow>, Error> {
    let reader = open_csv_source(path)?;
    read_index_from_reader(reader)
}

/// Parses `symbol,date,occurrences` rows, validating ISO dates and positive
/// occurrence counts.
pub fn read_index_from_reader<R: Read>(reader: R) -> Result<Vec<IndexRow>, Error> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader.headers()?.clone();
    let [symbol_column, date_column, occurrences_column] = INDEX_HEADER;
    let symbol_idx = column_index(&headers, symbol_column)?;
    let date_idx = column_index(&headers, date_column)?;
    let occurrences_idx = column_index(&headers, occurrences_column)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());

        let symbol = record.get(symbol_idx).unwrap_or_default().trim();
        if symbol.is_empty() {
            return Err(Error::ParserError(format!("line {}: empty symbol", line)));
        }

        let raw_date = record.get(date_idx).unwrap_or_default().trim();
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|e| {
            Error::ParserError(format!("line {}: invalid date '{}': {}", line, raw_date, e))
        })?;

        let raw_occurrences = record.get(occurrences_idx).unwrap_or_default().trim();
        let occurrences = raw_occurrences
            .parse::<u64>()
            .ok()
            .filter(|occurrences| *occurrences > 0)
            .ok_or_else(|| {
                Error::ParserError(format!(
                    "line {}: invalid occurrences '{}'",
                    line, raw_occurrences
                ))
            })?;

        rows.push(IndexRow::new(symbol, date, occurrences));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_index() {
        let csv = "symbol,date,occurrences\nGME,2021-01-05,2\nAMC,2021-01-06,1\n";
        let rows = read_index_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(
            rows,
            vec![
                IndexRow::new("GME", NaiveDate::from_ymd_opt(2021, 1, 5).unwrap(), 2),
                IndexRow::new("AMC", NaiveDate::from_ymd_opt(2021, 1, 6).unwrap(), 1),
            ]
        );
    }

    #[test]
    fn test_read_index_rejects_zero_occurrences() {
        let csv = "symbol,date,occurrences\nGME,2021-01-05,0\n";
        assert!(matches!(
            read_index_from_reader(csv.as_bytes()),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_read_index_rejects_bad_dates() {
        let csv = "symbol,date,occurrences\nGME,01/05/2021,3\n";
        assert!(matches!(
            read_index_from_reader(csv.as_bytes()),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_read_index_requires_header() {
        let csv = "ticker,day,count\nGME,2021-01-05,3\n";
        assert!(matches!(
            read_index_from_reader(csv.as_bytes()),
            Err(Error::MissingColumn(column)) if column == "symbol"
        ));
    }
}
