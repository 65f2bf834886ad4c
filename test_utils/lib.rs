#![allow(dead_code)] // Not every helper is used by every test binary

use chrono::NaiveDate;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use ticker_mentions::{IndexRow, Ticker};
pub mod constants;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Invalid test date")
}

pub fn ticker(symbol: &str, sector: Option<&str>) -> Ticker {
    Ticker::new(symbol, &format!("{} Inc", symbol), sector, None)
}

/// Collapses index rows into a set so comparisons ignore row order.
pub fn index_row_set(rows: &[IndexRow]) -> BTreeSet<IndexRow> {
    rows.iter().cloned().collect()
}

/// Writes a gzip compressed copy of `source` into `target_dir`, returning its path.
pub fn write_gzip_copy(source: &Path, target_dir: &Path) -> PathBuf {
    let file_name = format!(
        "{}.gz",
        source
            .file_name()
            .expect("Source has no file name")
            .to_string_lossy()
    );
    let target_path = target_dir.join(file_name);

    let mut input = File::open(source).expect("Failed to open source file");
    let output = File::create(&target_path).expect("Failed to create gzip file");

    let mut encoder = GzEncoder::new(output, Compression::default());
    io::copy(&mut input, &mut encoder).expect("Failed to compress file");
    encoder.finish().expect("Failed to finalize compression");

    target_path
}

/// Writes `contents` to a file called `file_name` inside `target_dir`.
pub fn write_test_file(target_dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let target_path = target_dir.join(file_name);
    fs::write(&target_path, contents).expect("Failed to write test file");

    target_path
}
