use crate::models::TickerCatalogConfig;
use crate::types::{CompanyName, SectorName, TickerSymbol};
use crate::utils::{clean_company_name, clean_symbol, is_clean_symbol};
use std::fmt;

/// A raw row from an exchange listing file, before any cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRecord {
    pub symbol: String,
    pub name: String,
    pub sector: Option<String>,
    pub industry: Option<String>,
}

/// Reference metadata for a single listed stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    pub symbol: TickerSymbol,
    pub name: CompanyName,
    pub sector: Option<SectorName>,
    pub industry: Option<SectorName>,
}

impl Ticker {
    pub fn new(
        symbol: &str,
        name: &str,
        sector: Option<&str>,
        industry: Option<&str>,
    ) -> Self {
        Ticker {
            symbol: symbol.to_string(),
            name: name.to_string(),
            sector: sector.map(str::to_string),
            industry: industry.map(str::to_string),
        }
    }

    /// Cleans and validates a listing row.
    ///
    /// Returns `None` when the row is excluded: a symbol that needed more than
    /// whitespace/case correction, a missing sector, a symbol shorter than the
    /// configured minimum, or a symbol in the ignore set.
    pub fn from_listing_record(
        record: &ListingRecord,
        config: &TickerCatalogConfig,
    ) -> Option<Self> {
        if !is_clean_symbol(&record.symbol) {
            return None;
        }

        let symbol = clean_symbol(&record.symbol);
        if symbol.is_empty() {
            return None;
        }

        let sector = record.sector.as_deref()?;

        if symbol.len() < config.min_symbol_length
            || config.ignored_symbols.contains(&symbol.as_str())
        {
            return None;
        }

        let name = clean_company_name(&record.name);
        let name = if name.is_empty() { symbol.clone() } else { name };

        Some(Ticker {
            symbol,
            name,
            sector: Some(sector.to_string()),
            industry: record.industry.clone(),
        })
    }

    /// Link to the ticker's quote page on Yahoo Finance, or `None` for an
    /// empty symbol.
    pub fn yahoo_finance_url(&self) -> Option<String> {
        if self.symbol.is_empty() {
            return None;
        }

        Some(format!("https://finance.yahoo.com/quote/{}", self.symbol))
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.symbol, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_TICKER_CATALOG_CONFIG;

    fn record(symbol: &str, name: &str, sector: Option<&str>) -> ListingRecord {
        ListingRecord {
            symbol: symbol.to_string(),
            name: name.to_string(),
            sector: sector.map(str::to_string),
            industry: Some("Testing".to_string()),
        }
    }

    #[test]
    fn test_from_listing_record_cleans_fields() {
        let ticker = Ticker::from_listing_record(
            &record(" gme ", "GameStop Corporation Common Stock", Some("Consumer Services")),
            DEFAULT_TICKER_CATALOG_CONFIG,
        )
        .unwrap();

        assert_eq!(ticker.symbol, "GME");
        assert_eq!(ticker.name, "GameStop Corp");
        assert_eq!(ticker.sector.as_deref(), Some("Consumer Services"));
        assert_eq!(ticker.industry.as_deref(), Some("Testing"));
    }

    #[test]
    fn test_from_listing_record_rejects_malformed_symbols() {
        for symbol in ["BRK.B", "ABC^D", "GME1", "123", ""] {
            assert_eq!(
                Ticker::from_listing_record(
                    &record(symbol, "Name Inc", Some("Finance")),
                    DEFAULT_TICKER_CATALOG_CONFIG
                ),
                None,
                "{} should be rejected",
                symbol
            );
        }
    }

    #[test]
    fn test_from_listing_record_requires_sector() {
        assert_eq!(
            Ticker::from_listing_record(
                &record("TSLA", "Tesla Inc", None),
                DEFAULT_TICKER_CATALOG_CONFIG
            ),
            None
        );
    }

    #[test]
    fn test_from_listing_record_applies_length_and_ignore_filters() {
        let config = DEFAULT_TICKER_CATALOG_CONFIG;

        assert_eq!(
            Ticker::from_listing_record(&record("GE", "General Electric Company", Some("Industrials")), config),
            None
        );
        assert_eq!(
            Ticker::from_listing_record(&record("YOLO", "AdvisorShares Pure Cannabis", Some("Finance")), config),
            None
        );

        let no_length_filter = TickerCatalogConfig {
            min_symbol_length: 0,
            ..*config
        };
        assert!(Ticker::from_listing_record(
            &record("GE", "General Electric Company", Some("Industrials")),
            &no_length_filter
        )
        .is_some());
        // The ignore set still applies without the length filter.
        assert_eq!(
            Ticker::from_listing_record(&record("A", "Agilent Technologies Inc", Some("Capital Goods")), &no_length_filter),
            None
        );
    }

    #[test]
    fn test_from_listing_record_falls_back_to_symbol_for_name() {
        let ticker = Ticker::from_listing_record(
            &record("NOK", "  ", Some("Technology")),
            DEFAULT_TICKER_CATALOG_CONFIG,
        )
        .unwrap();

        assert_eq!(ticker.name, "NOK");
    }

    #[test]
    fn test_yahoo_finance_url() {
        assert_eq!(
            Ticker::new("TSLA", "", None, None).yahoo_finance_url(),
            Some("https://finance.yahoo.com/quote/TSLA".to_string())
        );
        assert_eq!(Ticker::new("", "", None, None).yahoo_finance_url(), None);
    }
}
