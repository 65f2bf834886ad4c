use crate::models::{IndexRow, IndexSummary, IndexWriter, IndexerConfig, Post, Ticker, TickerCatalog};
use crate::types::{DailyOccurrences, Occurrences, TickerSymbolOccurrencesMap};
use crate::Error;
use log::{debug, info};
use std::io::Write;
use std::path::Path;

/// Batch job which turns posts and a ticker catalog into the occurrence index.
///
/// Every run regenerates the full index; there is no incremental mode.
pub struct OccurrenceIndexer {
    config: IndexerConfig,
}

impl OccurrenceIndexer {
    pub fn new(config: &IndexerConfig) -> Self {
        OccurrenceIndexer { config: *config }
    }

    /// Counts whole-token mentions of every catalog symbol, summed per date.
    ///
    /// Posts are scanned once; each whitespace-delimited token that equals a
    /// catalog symbol adds one mention on the post's date. Symbols that are
    /// never mentioned have no entry.
    pub fn count_occurrences(
        &self,
        posts: &[Post],
        catalog: &TickerCatalog,
    ) -> TickerSymbolOccurrencesMap {
        let mut occurrences_map = TickerSymbolOccurrencesMap::new();

        for post in posts {
            for token in post.tokens() {
                if let Some(daily_occurrences) = occurrences_map.get_mut(token) {
                    *daily_occurrences.entry(post.date).or_insert(0) += 1;
                } else if catalog.contains(token) {
                    let mut daily_occurrences = DailyOccurrences::new();
                    daily_occurrences.insert(post.date, 1);
                    occurrences_map.insert(token.to_string(), daily_occurrences);
                }
            }
        }

        occurrences_map
    }

    /// Builds the index in memory: tickers in catalog order, rows by ascending date.
    pub fn build_index(&self, posts: &[Post], catalog: &TickerCatalog) -> Vec<IndexRow> {
        let mut occurrences_map = self.count_occurrences(posts, catalog);

        catalog
            .iter()
            .filter_map(|ticker| self.take_ticker_rows(ticker, &mut occurrences_map))
            .flatten()
            .collect()
    }

    /// Writes the index through `index_writer`, one flushed batch per ticker.
    pub fn write_index<W: Write>(
        &self,
        posts: &[Post],
        catalog: &TickerCatalog,
        index_writer: &mut IndexWriter<W>,
    ) -> Result<IndexSummary, Error> {
        let mut occurrences_map = self.count_occurrences(posts, catalog);
        let mut summary = IndexSummary::default();
        let total_tickers = catalog.len();

        for (ticker_idx, ticker) in catalog.iter().enumerate() {
            let rows = match self.take_ticker_rows(ticker, &mut occurrences_map) {
                Some(rows) => rows,
                None => {
                    summary.tickers_excluded += 1;
                    continue;
                }
            };

            let ticker_total: Occurrences = rows.iter().map(|row| row.occurrences).sum();
            index_writer.append_rows(&rows)?;

            info!(
                "[{}/{}] {} {}",
                ticker_idx + 1,
                total_tickers,
                ticker.symbol,
                ticker_total
            );

            summary.tickers_indexed += 1;
            summary.rows_written += rows.len();
            summary.total_occurrences += ticker_total;
        }

        Ok(summary)
    }

    /// Writes the complete index to `path`, replacing any previous artifact.
    ///
    /// A failure part way through leaves a truncated file which should be
    /// discarded; re-running regenerates it from scratch.
    pub fn write_index_to_path<P: AsRef<Path>>(
        &self,
        posts: &[Post],
        catalog: &TickerCatalog,
        path: P,
    ) -> Result<IndexSummary, Error> {
        let path = path.as_ref();
        info!("Writing index to {}", path.display());

        let mut index_writer = IndexWriter::create(path)?;
        let summary = self.write_index(posts, catalog, &mut index_writer)?;
        index_writer.into_inner()?.flush()?;

        info!(
            "Indexed {} tickers ({} below {} occurrences), {} rows",
            summary.tickers_indexed,
            summary.tickers_excluded,
            self.config.min_occurrences,
            summary.rows_written
        );

        Ok(summary)
    }

    /// Removes the ticker's counts from the map and turns them into rows,
    /// or `None` when the ticker's total is below the threshold.
    fn take_ticker_rows(
        &self,
        ticker: &Ticker,
        occurrences_map: &mut TickerSymbolOccurrencesMap,
    ) -> Option<Vec<IndexRow>> {
        let daily_occurrences = occurrences_map.remove(&ticker.symbol).unwrap_or_default();
        let total: Occurrences = daily_occurrences.values().sum();

        if total < self.config.min_occurrences {
            debug!(
                "Excluding {} with {} occurrences",
                ticker.symbol, total
            );
            return None;
        }

        Some(
            daily_occurrences
                .into_iter()
                .map(|(date, occurrences)| IndexRow::new(&ticker.symbol, date, occurrences))
                .collect(),
        )
    }
}
