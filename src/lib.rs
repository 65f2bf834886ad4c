mod config;
pub use config::{
    DEFAULT_INDEXER_CONFIG, DEFAULT_MESSAGE_LOADER_CONFIG, DEFAULT_TICKER_CATALOG_CONFIG,
};
pub mod constants;
pub mod models;
pub use models::{
    read_index_from_path, read_index_from_reader, DailySeries, DuplicateSymbolPolicy, Error,
    IndexQuery, IndexRow, IndexSummary, IndexWriter, IndexerConfig, ListingRecord,
    MessageLoader, MessageLoaderConfig, OccurrenceIndexer, Post, QueryFilter, SectorFilter,
    StockSelection, SymbolTotal, Ticker, TickerCatalog, TickerCatalogConfig, TimeWindow,
};
pub mod types;
mod utils;
pub use types::{CompanyName, Occurrences, SectorName, TickerSymbol};
pub use utils::{clean_company_name, clean_symbol, normalize_body};

use std::path::Path;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Runs the full indexing pass with the default configuration: loads the
/// corpus and listings, then writes the index to `output_path`.
pub fn create_index<M, L, O>(
    messages_path: M,
    listing_paths: &[L],
    output_path: O,
) -> Result<IndexSummary, Error>
where
    M: AsRef<Path>,
    L: AsRef<Path>,
    O: AsRef<Path>,
{
    create_index_with_custom_config(
        DEFAULT_MESSAGE_LOADER_CONFIG,
        DEFAULT_TICKER_CATALOG_CONFIG,
        DEFAULT_INDEXER_CONFIG,
        messages_path,
        listing_paths,
        output_path,
    )
}

pub fn create_index_with_custom_config<M, L, O>(
    message_loader_config: &MessageLoaderConfig,
    ticker_catalog_config: &TickerCatalogConfig,
    indexer_config: &IndexerConfig,
    messages_path: M,
    listing_paths: &[L],
    output_path: O,
) -> Result<IndexSummary, Error>
where
    M: AsRef<Path>,
    L: AsRef<Path>,
    O: AsRef<Path>,
{
    // Load the catalog first so a bad listing file fails before the (slow) corpus read
    let catalog = TickerCatalog::from_listing_files(listing_paths, ticker_catalog_config)?;
    let posts = MessageLoader::new(message_loader_config).load_from_path(messages_path)?;

    OccurrenceIndexer::new(indexer_config).write_index_to_path(&posts, &catalog, output_path)
}

/// Loads a previously written index together with its listings into a
/// query service.
pub fn load_index_query<I, L>(
    index_path: I,
    listing_paths: &[L],
    ticker_catalog_config: &TickerCatalogConfig,
) -> Result<IndexQuery, Error>
where
    I: AsRef<Path>,
    L: AsRef<Path>,
{
    let catalog = TickerCatalog::from_listing_files(listing_paths, ticker_catalog_config)?;
    let rows = read_index_from_path(index_path)?;

    Ok(IndexQuery::new(catalog, rows))
}
