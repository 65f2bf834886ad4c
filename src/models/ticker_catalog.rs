use crate::constants::{
    LISTING_INDUSTRY_COLUMN, LISTING_NAME_COLUMN, LISTING_SECTOR_COLUMN, LISTING_SYMBOL_COLUMN,
};
use crate::models::{DuplicateSymbolPolicy, ListingRecord, Ticker, TickerCatalogConfig};
use crate::utils::{column_index, open_csv_source};
use crate::Error;
use csv::ReaderBuilder;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Ordered, immutable collection of tickers built from exchange listings.
#[derive(Debug, Clone, Default)]
pub struct TickerCatalog {
    tickers: Vec<Ticker>,
    symbol_map: HashMap<String, usize>,
}

impl TickerCatalog {
    /// Loads and concatenates listing files (optionally gzip compressed), in
    /// the order given.
    pub fn from_listing_files<P: AsRef<Path>>(
        paths: &[P],
        config: &TickerCatalogConfig,
    ) -> Result<Self, Error> {
        let mut records = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let reader = open_csv_source(path)?;
            let file_records = Self::read_listing_records(reader)?;

            info!(
                "Read {} listing rows from {}",
                file_records.len(),
                path.display()
            );

            records.extend(file_records);
        }

        Self::from_listing_records(records, config)
    }

    /// Parses the `Symbol`, `Name`, `Sector`, `Industry` columns of a listing
    /// CSV. Empty sector/industry cells become `None`.
    pub fn read_listing_records<R: Read>(reader: R) -> Result<Vec<ListingRecord>, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        // Extract column positions based on header names
        let headers = reader.headers()?.clone();
        let symbol_idx = column_index(&headers, LISTING_SYMBOL_COLUMN)?;
        let name_idx = column_index(&headers, LISTING_NAME_COLUMN)?;
        let sector_idx = column_index(&headers, LISTING_SECTOR_COLUMN)?;
        let industry_idx = column_index(&headers, LISTING_INDUSTRY_COLUMN)?;

        let optional_field = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record?;

            records.push(ListingRecord {
                symbol: record.get(symbol_idx).unwrap_or_default().to_string(),
                name: record.get(name_idx).unwrap_or_default().to_string(),
                sector: optional_field(record.get(sector_idx)),
                industry: optional_field(record.get(industry_idx)),
            });
        }

        Ok(records)
    }

    /// Builds the catalog from raw listing rows, silently excluding rows which
    /// fail validation and resolving repeated symbols per the configured
    /// `DuplicateSymbolPolicy`.
    pub fn from_listing_records<I>(records: I, config: &TickerCatalogConfig) -> Result<Self, Error>
    where
        I: IntoIterator<Item = ListingRecord>,
    {
        let mut catalog = TickerCatalog::default();
        let mut rejected = 0usize;

        for record in records {
            match Ticker::from_listing_record(&record, config) {
                Some(ticker) => catalog.insert(ticker, config.duplicate_symbol_policy)?,
                None => {
                    debug!("Excluding listing {:?}", record.symbol);
                    rejected += 1;
                }
            }
        }

        if catalog.is_empty() {
            warn!("No listings passed validation ({} excluded)", rejected);
        } else {
            info!(
                "Ticker catalog holds {} tickers ({} listings excluded)",
                catalog.len(),
                rejected
            );
        }

        Ok(catalog)
    }

    /// Builds the catalog from already cleaned tickers.
    pub fn from_tickers<I>(tickers: I, policy: DuplicateSymbolPolicy) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Ticker>,
    {
        let mut catalog = TickerCatalog::default();
        for ticker in tickers {
            catalog.insert(ticker, policy)?;
        }

        Ok(catalog)
    }

    fn insert(&mut self, ticker: Ticker, policy: DuplicateSymbolPolicy) -> Result<(), Error> {
        match self.symbol_map.get(&ticker.symbol).copied() {
            None => {
                self.symbol_map
                    .insert(ticker.symbol.clone(), self.tickers.len());
                self.tickers.push(ticker);
            }
            Some(existing_idx) => match policy {
                DuplicateSymbolPolicy::Reject => {
                    return Err(Error::DuplicateSymbol(ticker.symbol));
                }
                DuplicateSymbolPolicy::FirstWins => {
                    debug!("Dropping repeated listing for {}", ticker.symbol);
                }
                DuplicateSymbolPolicy::LastWins => {
                    debug!("Replacing earlier listing for {}", ticker.symbol);
                    self.tickers[existing_idx] = ticker;
                }
            },
        }

        Ok(())
    }

    /// Tickers in catalog order.
    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    pub fn get(&self, symbol: &str) -> Option<&Ticker> {
        self.symbol_map
            .get(symbol)
            .map(|&ticker_idx| &self.tickers[ticker_idx])
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbol_map.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ticker> {
        self.tickers.iter()
    }
}

impl<'a> IntoIterator for &'a TickerCatalog {
    type Item = &'a Ticker;
    type IntoIter = std::slice::Iter<'a, Ticker>;

    fn into_iter(self) -> Self::IntoIter {
        self.tickers.iter()
    }
}
