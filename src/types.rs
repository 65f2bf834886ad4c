use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
///
/// Once normalized, a symbol only contains the characters `A-Z`.
pub type TickerSymbol = String;

/// Represents the display name of a company as an owned `String`.
pub type CompanyName = String;

/// Represents a sector or industry classification as an owned `String`.
pub type SectorName = String;

/// Represents the number of times a ticker symbol was mentioned.
pub type Occurrences = u64;

/// Daily occurrence totals for a single ticker symbol, ordered by date.
pub type DailyOccurrences = BTreeMap<NaiveDate, Occurrences>;

/// Daily occurrence totals keyed by ticker symbol.
pub type TickerSymbolOccurrencesMap = HashMap<TickerSymbol, DailyOccurrences>;
