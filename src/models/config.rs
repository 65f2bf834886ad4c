use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub struct MessageLoaderConfig {
    /// Keep every Nth corpus row (1 keeps everything). Useful for cheaper development runs.
    pub sample_stride: usize,
}

/// How the ticker catalog treats a symbol listed more than once across
/// listing sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateSymbolPolicy {
    /// Fail the catalog load.
    Reject,
    /// Keep the first listing; later ones are dropped.
    FirstWins,
    /// The later listing replaces the earlier one, keeping its catalog position.
    LastWins,
}

impl fmt::Display for DuplicateSymbolPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateSymbolPolicy::Reject => write!(f, "reject"),
            DuplicateSymbolPolicy::FirstWins => write!(f, "first-wins"),
            DuplicateSymbolPolicy::LastWins => write!(f, "last-wins"),
        }
    }
}

impl FromStr for DuplicateSymbolPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "reject" => Ok(DuplicateSymbolPolicy::Reject),
            "first-wins" => Ok(DuplicateSymbolPolicy::FirstWins),
            "last-wins" => Ok(DuplicateSymbolPolicy::LastWins),
            _ => Err(format!("Unknown duplicate symbol policy: {}", value)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TickerCatalogConfig {
    /// Symbols shorter than this are excluded (0 disables the length filter).
    pub min_symbol_length: usize,
    pub ignored_symbols: &'static [&'static str],
    pub duplicate_symbol_policy: DuplicateSymbolPolicy,
}

#[derive(Debug, Clone, Copy)]
pub struct IndexerConfig {
    /// Tickers mentioned fewer times than this, across all dates, are left out of the index.
    pub min_occurrences: u64,
}
