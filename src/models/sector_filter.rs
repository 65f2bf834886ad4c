use crate::models::Ticker;
use crate::types::SectorName;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Restricts top-N queries to a single sector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectorFilter {
    #[default]
    All,
    Sector(SectorName),
}

impl SectorFilter {
    pub fn matches(&self, ticker: &Ticker) -> bool {
        match self {
            SectorFilter::All => true,
            SectorFilter::Sector(sector) => ticker.sector.as_deref() == Some(sector.as_str()),
        }
    }
}

impl fmt::Display for SectorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectorFilter::All => write!(f, "all"),
            SectorFilter::Sector(sector) => write!(f, "{}", sector),
        }
    }
}

impl FromStr for SectorFilter {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" | "" => Ok(SectorFilter::All),
            sector => Ok(SectorFilter::Sector(sector.to_string())),
        }
    }
}
