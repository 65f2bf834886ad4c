use std::fmt;

#[derive(Debug)]
pub enum Error {
    IoError(std::io::Error),
    CsvError(csv::Error),
    MissingColumn(String),
    TimestampParseError { line: u64, value: String },
    ParserError(String),
    DuplicateSymbol(String),
    InvalidSelection(String),
    UnknownSymbol(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::CsvError(err) => write!(f, "CSV Error: {}", err),
            Error::MissingColumn(column) => write!(f, "Missing Column: '{}'", column),
            Error::TimestampParseError { line, value } => {
                write!(f, "Timestamp Parse Error: line {}: '{}'", line, value)
            }
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::DuplicateSymbol(symbol) => write!(f, "Duplicate Symbol: {}", symbol),
            Error::InvalidSelection(msg) => write!(f, "Invalid Selection: {}", msg),
            Error::UnknownSymbol(symbol) => write!(f, "Unknown Symbol: {}", symbol),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::CsvError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err)
    }
}
