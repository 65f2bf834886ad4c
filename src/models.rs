pub mod config;
pub use config::{DuplicateSymbolPolicy, IndexerConfig, MessageLoaderConfig, TickerCatalogConfig};

pub mod error;
pub use error::Error;

pub mod post;
pub use post::Post;

pub mod ticker;
pub use ticker::{ListingRecord, Ticker};

pub mod index_row;
pub use index_row::{IndexRow, IndexSummary};

pub mod message_loader;
pub use message_loader::MessageLoader;

pub mod ticker_catalog;
pub use ticker_catalog::TickerCatalog;

pub mod index_writer;
pub use index_writer::IndexWriter;

pub mod index_reader;
pub use index_reader::{read_index_from_path, read_index_from_reader};

pub mod occurrence_indexer;
pub use occurrence_indexer::OccurrenceIndexer;

pub mod stock_selection;
pub use stock_selection::StockSelection;

pub mod time_window;
pub use time_window::TimeWindow;

pub mod sector_filter;
pub use sector_filter::SectorFilter;

pub mod index_query;
pub use index_query::{DailySeries, IndexQuery, QueryFilter, SymbolTotal};
