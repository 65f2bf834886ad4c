#[path = "../test_utils/lib.rs"]
mod test_utils;

use chrono::NaiveDate;
use tempfile::tempdir;
use test_utils::constants::TEST_LISTING_FILE_PATHS;
use test_utils::{date, ticker, write_test_file};
use ticker_mentions::{
    load_index_query, DuplicateSymbolPolicy, Error, IndexQuery, IndexRow, QueryFilter,
    SectorFilter, StockSelection, TickerCatalog, TimeWindow, DEFAULT_TICKER_CATALOG_CONFIG,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn index_query() -> IndexQuery {
        let catalog = TickerCatalog::from_tickers(
            vec![
                ticker("GME", Some("Retail")),
                ticker("AMC", Some("Media")),
                ticker("TSLA", Some("Auto")),
                ticker("NOK", Some("Technology")),
                ticker("BB", Some("Technology")),
            ],
            DuplicateSymbolPolicy::Reject,
        )
        .unwrap();

        let rows = vec![
            IndexRow::new("GME", date(2021, 1, 25), 10),
            IndexRow::new("GME", date(2021, 1, 27), 50),
            IndexRow::new("GME", date(2021, 1, 28), 40),
            IndexRow::new("AMC", date(2021, 1, 27), 20),
            IndexRow::new("AMC", date(2021, 1, 28), 30),
            IndexRow::new("TSLA", date(2020, 12, 1), 100),
            IndexRow::new("TSLA", date(2021, 1, 28), 5),
            IndexRow::new("NOK", date(2021, 1, 27), 15),
            IndexRow::new("OLD", date(2021, 1, 27), 999),
        ];

        IndexQuery::new(catalog, rows)
    }

    fn filter(selection: StockSelection, window: TimeWindow, sector: SectorFilter) -> QueryFilter {
        QueryFilter {
            selection,
            window,
            sector,
            reference_date: date(2021, 1, 28),
        }
    }

    fn ranked(index_query: &IndexQuery, filter: &QueryFilter) -> Vec<(String, u64)> {
        index_query
            .totals(filter)
            .unwrap()
            .into_iter()
            .map(|total| (total.ticker.symbol.clone(), total.occurrences))
            .collect()
    }

    fn owned(pairs: &[(&str, u64)]) -> Vec<(String, u64)> {
        pairs
            .iter()
            .map(|(symbol, occurrences)| (symbol.to_string(), *occurrences))
            .collect()
    }

    #[test]
    fn test_indexed_tickers_and_sectors() {
        let index_query = index_query();

        let symbols: Vec<&str> = index_query
            .indexed_tickers()
            .into_iter()
            .map(|ticker| ticker.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["AMC", "GME", "NOK", "TSLA"]);

        assert_eq!(
            index_query.indexed_sectors(),
            vec!["Auto", "Media", "Retail", "Technology"]
        );
    }

    #[test]
    fn test_top_n_within_window() {
        let index_query = index_query();

        assert_eq!(
            ranked(
                &index_query,
                &filter(StockSelection::TopN(3), TimeWindow::Month, SectorFilter::All)
            ),
            owned(&[("GME", 100), ("AMC", 50), ("NOK", 15)])
        );

        assert_eq!(
            ranked(
                &index_query,
                &filter(StockSelection::TopN(3), TimeWindow::AllTime, SectorFilter::All)
            ),
            owned(&[("TSLA", 105), ("GME", 100), ("AMC", 50)])
        );
    }

    #[test]
    fn test_top_n_within_sector() {
        let index_query = index_query();
        let technology = SectorFilter::Sector("Technology".to_string());

        assert_eq!(
            ranked(
                &index_query,
                &filter(StockSelection::TopN(5), TimeWindow::Month, technology)
            ),
            owned(&[("NOK", 15)])
        );
    }

    #[test]
    fn test_ties_are_ranked_by_symbol() {
        let catalog = TickerCatalog::from_tickers(
            vec![ticker("ZZZ", Some("Retail")), ticker("AAA", Some("Retail"))],
            DuplicateSymbolPolicy::Reject,
        )
        .unwrap();
        let index_query = IndexQuery::new(
            catalog,
            vec![
                IndexRow::new("ZZZ", date(2021, 1, 28), 7),
                IndexRow::new("AAA", date(2021, 1, 28), 7),
            ],
        );

        assert_eq!(
            ranked(
                &index_query,
                &filter(StockSelection::TopN(1), TimeWindow::Week, SectorFilter::All)
            ),
            owned(&[("AAA", 7)])
        );
    }

    #[test]
    fn test_by_symbol_ignores_sector() {
        let index_query = index_query();
        let selection = "symbol|TSLA".parse::<StockSelection>().unwrap();

        assert_eq!(
            ranked(
                &index_query,
                &filter(
                    selection,
                    TimeWindow::Month,
                    SectorFilter::Sector("Media".to_string())
                )
            ),
            owned(&[("TSLA", 5)])
        );
    }

    #[test]
    fn test_by_symbol_unknown() {
        let index_query = index_query();
        let result = index_query.totals(&filter(
            StockSelection::BySymbol("OLD".to_string()),
            TimeWindow::AllTime,
            SectorFilter::All,
        ));

        assert!(matches!(result, Err(Error::UnknownSymbol(symbol)) if symbol == "OLD"));
    }

    #[test]
    fn test_by_symbol_without_rows() {
        let index_query = index_query();
        let filter = filter(
            StockSelection::BySymbol("BB".to_string()),
            TimeWindow::AllTime,
            SectorFilter::All,
        );

        assert!(index_query.totals(&filter).unwrap().is_empty());
        assert!(index_query.daily_series(&filter).unwrap().is_empty());
    }

    #[test]
    fn test_daily_series_is_zero_filled() {
        let index_query = index_query();
        let series = index_query
            .daily_series(&filter(
                StockSelection::TopN(2),
                TimeWindow::Month,
                SectorFilter::All,
            ))
            .unwrap();

        let days: Vec<NaiveDate> = (25..=28).map(|day| date(2021, 1, day)).collect();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].ticker.symbol, "GME");
        assert_eq!(
            series[0].points,
            days.iter().copied().zip([10, 0, 50, 40]).collect::<Vec<_>>()
        );
        assert_eq!(series[1].ticker.symbol, "AMC");
        assert_eq!(
            series[1].points,
            days.iter().copied().zip([0, 0, 20, 30]).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_relative_series_shares() {
        let index_query = index_query();
        let series = index_query
            .relative_series(&filter(
                StockSelection::TopN(2),
                TimeWindow::Month,
                SectorFilter::All,
            ))
            .unwrap();

        let expected = [
            ("GME", [100.0, 0.0, 50.0 / 70.0 * 100.0, 40.0 / 70.0 * 100.0]),
            ("AMC", [0.0, 0.0, 20.0 / 70.0 * 100.0, 30.0 / 70.0 * 100.0]),
        ];

        for (s, (symbol, shares)) in series.iter().zip(expected) {
            assert_eq!(s.ticker.symbol, symbol);
            for ((_, actual), expected) in s.points.iter().zip(shares) {
                assert!(
                    (actual - expected).abs() < 1e-9,
                    "{}: expected {}, got {}",
                    symbol,
                    expected,
                    actual
                );
            }
        }
    }

    #[test]
    fn test_empty_window() {
        let index_query = index_query();
        let mut filter = filter(StockSelection::TopN(5), TimeWindow::Week, SectorFilter::All);
        filter.reference_date = date(2022, 6, 1);

        assert!(index_query.totals(&filter).unwrap().is_empty());
        assert!(index_query.daily_series(&filter).unwrap().is_empty());
        assert!(index_query.relative_series(&filter).unwrap().is_empty());
    }

    #[test]
    fn test_window_ends_at_reference_date() {
        let catalog = TickerCatalog::from_tickers(
            vec![ticker("GME", Some("Retail"))],
            DuplicateSymbolPolicy::Reject,
        )
        .unwrap();
        let index_query = IndexQuery::new(
            catalog,
            vec![
                IndexRow::new("GME", date(2021, 1, 5), 1),
                IndexRow::new("GME", date(2021, 2, 20), 1000),
            ],
        );

        for window in [TimeWindow::Week, TimeWindow::AllTime] {
            let mut filter = filter(StockSelection::TopN(5), window, SectorFilter::All);
            filter.reference_date = date(2021, 1, 6);

            assert_eq!(ranked(&index_query, &filter), owned(&[("GME", 1)]));

            let series = index_query.daily_series(&filter).unwrap();
            assert_eq!(series.len(), 1);
            assert_eq!(series[0].points, vec![(date(2021, 1, 5), 1)]);
        }
    }

    #[test]
    fn test_load_index_query_from_files() {
        let dir = tempdir().unwrap();
        let index_path = write_test_file(
            dir.path(),
            "compiled_index.csv",
            "symbol,date,occurrences\nGME,2021-01-05,2\nAMC,2021-01-05,1\nGME,2021-01-06,3\n",
        );

        let index_query = load_index_query(
            &index_path,
            TEST_LISTING_FILE_PATHS.as_slice(),
            DEFAULT_TICKER_CATALOG_CONFIG,
        )
        .unwrap();

        let mut filter = filter(
            "top|5".parse().unwrap(),
            "all".parse().unwrap(),
            "all".parse().unwrap(),
        );
        filter.reference_date = date(2021, 1, 6);

        assert_eq!(
            ranked(&index_query, &filter),
            owned(&[("GME", 5), ("AMC", 1)])
        );
    }
}
