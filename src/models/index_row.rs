use crate::types::{Occurrences, TickerSymbol};
use chrono::NaiveDate;

/// Aggregated mentions of one ticker symbol on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexRow {
    pub symbol: TickerSymbol,
    pub date: NaiveDate,
    pub occurrences: Occurrences,
}

impl IndexRow {
    pub fn new(symbol: &str, date: NaiveDate, occurrences: Occurrences) -> Self {
        IndexRow {
            symbol: symbol.to_string(),
            date,
            occurrences,
        }
    }
}

/// Totals produced by a completed indexing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexSummary {
    pub tickers_indexed: usize,
    pub tickers_excluded: usize,
    pub rows_written: usize,
    pub total_occurrences: Occurrences,
}
