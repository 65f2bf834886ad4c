use crate::models::{IndexRow, SectorFilter, StockSelection, Ticker, TickerCatalog, TimeWindow};
use crate::types::{DailyOccurrences, Occurrences, TickerSymbolOccurrencesMap};
use crate::Error;
use chrono::NaiveDate;
use log::warn;
use std::collections::BTreeSet;

/// Parameters of a single dashboard query.
///
/// `reference_date` anchors the time window; it is never read from the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    pub selection: StockSelection,
    pub window: TimeWindow,
    /// Only applied to `StockSelection::TopN`.
    pub sector: SectorFilter,
    pub reference_date: NaiveDate,
}

/// Total mentions of one ticker inside a query's window.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTotal<'a> {
    pub ticker: &'a Ticker,
    pub occurrences: Occurrences,
}

/// One point per day for a single ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries<'a, T> {
    pub ticker: &'a Ticker,
    pub points: Vec<(NaiveDate, T)>,
}

/// Read-only view over a loaded index and its ticker catalog.
///
/// Built once at startup and shared by every query afterwards.
pub struct IndexQuery {
    catalog: TickerCatalog,
    occurrences_map: TickerSymbolOccurrencesMap,
}

impl IndexQuery {
    /// Groups index rows by symbol. Rows for symbols missing from the catalog
    /// are ignored; repeated (symbol, date) rows are summed.
    pub fn new<I>(catalog: TickerCatalog, rows: I) -> Self
    where
        I: IntoIterator<Item = IndexRow>,
    {
        let mut occurrences_map = TickerSymbolOccurrencesMap::new();
        let mut unknown_symbols = BTreeSet::new();

        for row in rows {
            if !catalog.contains(&row.symbol) {
                unknown_symbols.insert(row.symbol);
                continue;
            }

            *occurrences_map
                .entry(row.symbol)
                .or_default()
                .entry(row.date)
                .or_insert(0) += row.occurrences;
        }

        if !unknown_symbols.is_empty() {
            warn!(
                "Ignoring index rows for {} symbols missing from the catalog: {:?}",
                unknown_symbols.len(),
                unknown_symbols
            );
        }

        IndexQuery {
            catalog,
            occurrences_map,
        }
    }

    /// Catalog tickers which have at least one index row, sorted by symbol.
    pub fn indexed_tickers(&self) -> Vec<&Ticker> {
        let mut tickers: Vec<&Ticker> = self
            .catalog
            .iter()
            .filter(|ticker| self.occurrences_map.contains_key(&ticker.symbol))
            .collect();
        tickers.sort_by(|a, b| a.symbol.cmp(&b.symbol));

        tickers
    }

    /// Distinct sectors of the indexed tickers, sorted.
    pub fn indexed_sectors(&self) -> Vec<&str> {
        self.indexed_tickers()
            .into_iter()
            .filter_map(|ticker| ticker.sector.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Ranks the selected tickers by mentions inside the window, most
    /// mentioned first (ties by symbol). Tickers without mentions in the
    /// window are left out.
    pub fn totals(&self, filter: &QueryFilter) -> Result<Vec<SymbolTotal<'_>>, Error> {
        let mut totals: Vec<SymbolTotal> = self
            .selected_tickers(filter)?
            .into_iter()
            .filter_map(|(ticker, daily_occurrences)| {
                let occurrences: Occurrences = windowed(daily_occurrences, filter)
                    .map(|(_, occurrences)| occurrences)
                    .sum();

                (occurrences > 0).then_some(SymbolTotal {
                    ticker,
                    occurrences,
                })
            })
            .collect();

        totals.sort_by(|a, b| {
            b.occurrences
                .cmp(&a.occurrences)
                .then_with(|| a.ticker.symbol.cmp(&b.ticker.symbol))
        });

        if let StockSelection::TopN(count) = filter.selection {
            totals.truncate(count);
        }

        Ok(totals)
    }

    /// Daily mentions of each ranked ticker, zero-filled across every day
    /// between the earliest and latest mention of any selected ticker in the
    /// window.
    pub fn daily_series(
        &self,
        filter: &QueryFilter,
    ) -> Result<Vec<DailySeries<'_, Occurrences>>, Error> {
        let selected = self.selected_tickers(filter)?;

        let date_range = selected
            .iter()
            .flat_map(|(_, daily_occurrences)| windowed(*daily_occurrences, filter))
            .map(|(date, _)| date)
            .fold(None, |range: Option<(NaiveDate, NaiveDate)>, date| match range {
                None => Some((date, date)),
                Some((first, last)) => Some((first.min(date), last.max(date))),
            });

        let (first_date, last_date) = match date_range {
            Some(date_range) => date_range,
            None => return Ok(Vec::new()),
        };

        let series = self
            .totals(filter)?
            .into_iter()
            .map(|total| {
                let daily_occurrences = self.occurrences_map.get(&total.ticker.symbol);

                let points = first_date
                    .iter_days()
                    .take_while(|date| *date <= last_date)
                    .map(|date| {
                        let occurrences = daily_occurrences
                            .and_then(|daily_occurrences| daily_occurrences.get(&date))
                            .copied()
                            .unwrap_or(0);
                        (date, occurrences)
                    })
                    .collect();

                DailySeries {
                    ticker: total.ticker,
                    points,
                }
            })
            .collect();

        Ok(series)
    }

    /// Each ranked ticker's percentage share of the day's mentions across all
    /// ranked tickers. Days without any mentions are 0.
    pub fn relative_series(&self, filter: &QueryFilter) -> Result<Vec<DailySeries<'_, f64>>, Error> {
        let series = self.daily_series(filter)?;

        let day_totals: Vec<Occurrences> = match series.first() {
            Some(first) => (0..first.points.len())
                .map(|day_idx| series.iter().map(|s| s.points[day_idx].1).sum())
                .collect(),
            None => return Ok(Vec::new()),
        };

        let relative = series
            .into_iter()
            .map(|s| DailySeries {
                ticker: s.ticker,
                points: s
                    .points
                    .into_iter()
                    .zip(&day_totals)
                    .map(|((date, occurrences), &day_total)| {
                        let share = if day_total == 0 {
                            0.0
                        } else {
                            100.0 * occurrences as f64 / day_total as f64
                        };
                        (date, share)
                    })
                    .collect(),
            })
            .collect();

        Ok(relative)
    }

    /// Tickers a filter applies to, paired with their full daily counts.
    fn selected_tickers(
        &self,
        filter: &QueryFilter,
    ) -> Result<Vec<(&Ticker, &DailyOccurrences)>, Error> {
        match &filter.selection {
            StockSelection::TopN(_) => Ok(self
                .catalog
                .iter()
                .filter(|ticker| filter.sector.matches(ticker))
                .filter_map(|ticker| {
                    self.occurrences_map
                        .get(&ticker.symbol)
                        .map(|daily_occurrences| (ticker, daily_occurrences))
                })
                .collect()),
            StockSelection::BySymbol(symbol) => {
                let ticker = self
                    .catalog
                    .get(symbol)
                    .ok_or_else(|| Error::UnknownSymbol(symbol.clone()))?;

                Ok(self
                    .occurrences_map
                    .get(&ticker.symbol)
                    .map(|daily_occurrences| vec![(ticker, daily_occurrences)])
                    .unwrap_or_default())
            }
        }
    }
}

/// Counts dated from the window's first day through the reference date.
fn windowed<'a>(
    daily_occurrences: &'a DailyOccurrences,
    filter: &QueryFilter,
) -> impl Iterator<Item = (NaiveDate, Occurrences)> + 'a {
    let range = match filter.window.min_date(filter.reference_date) {
        Some(min_date) => daily_occurrences.range(min_date..=filter.reference_date),
        None => daily_occurrences.range(..=filter.reference_date),
    };

    range.map(|(date, occurrences)| (*date, *occurrences))
}
