/// Header row of the index artifact.
pub const INDEX_HEADER: [&str; 3] = ["symbol", "date", "occurrences"];

/// Corpus column holding the free-text message body.
pub const BODY_COLUMN: &str = "body";

/// Corpus column holding the message timestamp.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

pub const LISTING_SYMBOL_COLUMN: &str = "Symbol";
pub const LISTING_NAME_COLUMN: &str = "Name";
pub const LISTING_SECTOR_COLUMN: &str = "Sector";
pub const LISTING_INDUSTRY_COLUMN: &str = "Industry";

/// Company names are truncated after the first of these tokens.
pub const CORPORATE_SUFFIX_TOKENS: &[&str] = &["Inc", "Company", "Corp", "Limited"];

/// Timestamp layouts accepted by the message loader, tried in order after RFC 3339.
pub const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Date layout used when a timestamp carries no time-of-day component.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Listed symbols which collide with ordinary words (or forum slang) and
/// would otherwise flood the index with false positives.
pub const IGNORED_TICKER_SYMBOLS: &[&str] = &[
    "A", "ALL", "AND", "ANY", "APP", "ARE", "BIG", "CAN", "CEO", "DD", "EDIT", "EOD", "FOR",
    "FUN", "GOOD", "HAS", "HOLD", "IMO", "IPO", "LOVE", "MOON", "NEW", "NOW", "ONE", "OPEN",
    "OUT", "PLAY", "REAL", "RUN", "SEE", "TWO", "USA", "WOW", "YOLO",
];
