use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;
use ticker_mentions::{
    create_index_with_custom_config, load_index_query, DuplicateSymbolPolicy, Error, IndexerConfig,
    MessageLoaderConfig, QueryFilter, SectorFilter, StockSelection, TickerCatalogConfig,
    TimeWindow, DEFAULT_INDEXER_CONFIG, DEFAULT_MESSAGE_LOADER_CONFIG,
    DEFAULT_TICKER_CATALOG_CONFIG,
};

#[derive(Debug, Parser)]
#[command(
    name = "ticker-mentions-cli",
    version,
    about = "Index and query stock ticker mentions in social-media posts"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Count ticker mentions in a message corpus and write the index artifact.
    Index(IndexArgs),
    /// Rank tickers by total mentions inside a time window.
    Rank(QueryArgs),
    /// Print daily mention series for the ranked tickers.
    Series {
        #[command(flatten)]
        query: QueryArgs,
        /// Print each ticker's percentage share of the day's mentions instead of counts.
        #[arg(long)]
        relative: bool,
    },
}

#[derive(Debug, Args)]
struct CatalogArgs {
    /// Exchange listing CSV files (Symbol, Name, Sector, Industry).
    #[arg(long = "listings", required = true, num_args = 1..)]
    listing_paths: Vec<PathBuf>,
    /// Minimum symbol length; 0 disables the length filter.
    #[arg(long, default_value_t = DEFAULT_TICKER_CATALOG_CONFIG.min_symbol_length)]
    min_symbol_length: usize,
    /// Keep symbols which are normally ignored as common words.
    #[arg(long)]
    no_ignore_list: bool,
    /// How repeated symbols across listings are resolved.
    #[arg(long, default_value_t = DEFAULT_TICKER_CATALOG_CONFIG.duplicate_symbol_policy)]
    duplicate_policy: DuplicateSymbolPolicy,
}

impl CatalogArgs {
    fn config(&self) -> TickerCatalogConfig {
        TickerCatalogConfig {
            min_symbol_length: self.min_symbol_length,
            ignored_symbols: if self.no_ignore_list {
                &[]
            } else {
                DEFAULT_TICKER_CATALOG_CONFIG.ignored_symbols
            },
            duplicate_symbol_policy: self.duplicate_policy,
        }
    }
}

#[derive(Debug, Args)]
struct IndexArgs {
    /// Message corpus CSV (body, timestamp); `.gz` files are decompressed.
    #[arg(long = "messages", env = "TICKER_MENTIONS_MESSAGES")]
    messages_path: PathBuf,
    #[command(flatten)]
    catalog: CatalogArgs,
    /// Destination of the index artifact; replaced if it exists.
    #[arg(long = "output")]
    output_path: PathBuf,
    /// Tickers mentioned fewer times than this are left out of the index.
    #[arg(long, default_value_t = DEFAULT_INDEXER_CONFIG.min_occurrences)]
    min_occurrences: u64,
    /// Keep every Nth message (for cheaper development runs).
    #[arg(long, default_value_t = DEFAULT_MESSAGE_LOADER_CONFIG.sample_stride)]
    sample_stride: usize,
}

#[derive(Debug, Args)]
struct QueryArgs {
    /// Index artifact written by the `index` command.
    #[arg(long = "index", env = "TICKER_MENTIONS_INDEX")]
    index_path: PathBuf,
    #[command(flatten)]
    catalog: CatalogArgs,
    /// `top|N` or `symbol|SYM`.
    #[arg(long, default_value = "top|5")]
    selection: StockSelection,
    /// week, month, 3month, year or all.
    #[arg(long, default_value = "month")]
    window: TimeWindow,
    /// Sector name, or `all`. Only used with `top|N` selections.
    #[arg(long, default_value = "all")]
    sector: SectorFilter,
    /// Last day of the time window (YYYY-MM-DD).
    #[arg(long)]
    reference_date: NaiveDate,
}

impl QueryArgs {
    fn filter(&self) -> QueryFilter {
        QueryFilter {
            selection: self.selection.clone(),
            window: self.window,
            sector: self.sector.clone(),
            reference_date: self.reference_date,
        }
    }
}

fn main() {
    // Initialize the logger, defaulting to info level progress output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Command::Index(args) => {
            let summary = create_index_with_custom_config(
                &MessageLoaderConfig {
                    sample_stride: args.sample_stride,
                },
                &args.catalog.config(),
                &IndexerConfig {
                    min_occurrences: args.min_occurrences,
                },
                &args.messages_path,
                &args.catalog.listing_paths,
                &args.output_path,
            )?;

            info!(
                "Wrote {} rows for {} tickers ({} total occurrences) to {}",
                summary.rows_written,
                summary.tickers_indexed,
                summary.total_occurrences,
                args.output_path.display()
            );
        }
        Command::Rank(args) => {
            let index_query = load_index_query(
                &args.index_path,
                &args.catalog.listing_paths,
                &args.catalog.config(),
            )?;

            for (rank, total) in index_query.totals(&args.filter())?.iter().enumerate() {
                match total.ticker.yahoo_finance_url() {
                    Some(url) => println!(
                        "{:>3}. {}: {} ({})",
                        rank + 1,
                        total.ticker,
                        total.occurrences,
                        url
                    ),
                    None => println!("{:>3}. {}: {}", rank + 1, total.ticker, total.occurrences),
                }
            }
        }
        Command::Series { query, relative } => {
            let index_query = load_index_query(
                &query.index_path,
                &query.catalog.listing_paths,
                &query.catalog.config(),
            )?;
            let filter = query.filter();

            println!("symbol,date,value");
            if relative {
                for series in index_query.relative_series(&filter)? {
                    for (date, share) in series.points {
                        println!("{},{},{:.2}", series.ticker.symbol, date, share);
                    }
                }
            } else {
                for series in index_query.daily_series(&filter)? {
                    for (date, occurrences) in series.points {
                        println!("{},{},{}", series.ticker.symbol, date, occurrences);
                    }
                }
            }
        }
    }

    Ok(())
}
