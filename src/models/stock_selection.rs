use crate::types::TickerSymbol;
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Which stocks a query covers.
///
/// Encoded as `top|N` or `symbol|SYM` only at string boundaries (CLI flags,
/// query strings) via `Display` / `FromStr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockSelection {
    /// The N most mentioned stocks.
    TopN(usize),
    /// A single stock.
    BySymbol(TickerSymbol),
}

impl fmt::Display for StockSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockSelection::TopN(count) => write!(f, "top|{}", count),
            StockSelection::BySymbol(symbol) => write!(f, "symbol|{}", symbol),
        }
    }
}

impl FromStr for StockSelection {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidSelection(format!("Unknown stock selection value: {}", value));

        match value.split_once('|') {
            Some(("top", count)) => count
                .parse::<usize>()
                .map(StockSelection::TopN)
                .map_err(|_| invalid()),
            Some(("symbol", symbol)) if !symbol.is_empty() && !symbol.contains('|') => {
                Ok(StockSelection::BySymbol(symbol.to_string()))
            }
            _ => Err(invalid()),
        }
    }
}
