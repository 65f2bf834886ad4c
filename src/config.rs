use crate::constants::IGNORED_TICKER_SYMBOLS;
use crate::models::{
    DuplicateSymbolPolicy, IndexerConfig, MessageLoaderConfig, TickerCatalogConfig,
};

pub const DEFAULT_MESSAGE_LOADER_CONFIG: &MessageLoaderConfig =
    &MessageLoaderConfig { sample_stride: 1 };

pub const DEFAULT_TICKER_CATALOG_CONFIG: &TickerCatalogConfig = &TickerCatalogConfig {
    min_symbol_length: 3,
    ignored_symbols: IGNORED_TICKER_SYMBOLS,
    duplicate_symbol_policy: DuplicateSymbolPolicy::LastWins,
};

pub const DEFAULT_INDEXER_CONFIG: &IndexerConfig = &IndexerConfig {
    min_occurrences: 10,
};
