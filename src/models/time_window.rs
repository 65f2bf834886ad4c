use crate::Error;
use chrono::{Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Trailing time window a query covers, relative to an explicit reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Week,
    Month,
    ThreeMonths,
    Year,
    AllTime,
}

impl TimeWindow {
    /// Number of days covered, including the reference date itself.
    pub fn days(&self) -> Option<u64> {
        match self {
            TimeWindow::Week => Some(7),
            TimeWindow::Month => Some(30),
            TimeWindow::ThreeMonths => Some(90),
            TimeWindow::Year => Some(365),
            TimeWindow::AllTime => None,
        }
    }

    /// Earliest date inside the window ending at `reference_date`, or `None`
    /// when the window is unbounded.
    pub fn min_date(&self, reference_date: NaiveDate) -> Option<NaiveDate> {
        self.days()
            .and_then(|days| reference_date.checked_sub_days(Days::new(days - 1)))
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::ThreeMonths => "3month",
            TimeWindow::Year => "year",
            TimeWindow::AllTime => "all",
        };

        write!(f, "{}", value)
    }
}

impl FromStr for TimeWindow {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "week" => Ok(TimeWindow::Week),
            "month" => Ok(TimeWindow::Month),
            "3month" => Ok(TimeWindow::ThreeMonths),
            "year" => Ok(TimeWindow::Year),
            "all" => Ok(TimeWindow::AllTime),
            _ => Err(Error::InvalidSelection(format!(
                "Unknown time selection value: {}",
                value
            ))),
        }
    }
}
