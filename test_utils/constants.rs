use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static TEST_MESSAGES_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "messages.csv"));

pub static TEST_LISTING_FILE_PATHS: LazyLock<Vec<PathBuf>> = LazyLock::new(|| {
    vec![
        define_path!("tests", "test_files", "NYSE_stock_tickers.csv"),
        define_path!("tests", "test_files", "NASDAQ_stock_tickers.csv"),
    ]
});
