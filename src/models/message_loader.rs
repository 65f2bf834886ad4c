use crate::constants::{BODY_COLUMN, TIMESTAMP_COLUMN};
use crate::models::{MessageLoaderConfig, Post};
use crate::utils::{column_index, open_csv_source, parse_timestamp};
use crate::Error;
use csv::ReaderBuilder;
use log::{debug, info};
use std::io::Read;
use std::path::Path;

/// Reads raw social-media posts from a CSV corpus.
///
/// The corpus must carry `body` and `timestamp` columns; any other columns
/// are ignored. Rows with an empty body are dropped, while a single
/// unparseable timestamp fails the whole load.
pub struct MessageLoader {
    config: MessageLoaderConfig,
}

impl MessageLoader {
    pub fn new(config: &MessageLoaderConfig) -> Self {
        MessageLoader { config: *config }
    }

    /// Loads posts from a CSV file (optionally gzip compressed).
    pub fn load_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Post>, Error> {
        let path = path.as_ref();
        info!("Loading messages from {}", path.display());

        let reader = open_csv_source(path)?;
        self.load_from_reader(reader)
    }

    /// Loads posts from any CSV reader, sorted by ascending date.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<Vec<Post>, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let body_idx = column_index(&headers, BODY_COLUMN)?;
        let timestamp_idx = column_index(&headers, TIMESTAMP_COLUMN)?;

        // A stride of 0 would otherwise divide by zero
        let sample_stride = self.config.sample_stride.max(1);

        let mut posts = Vec::new();
        let mut rows_read = 0usize;

        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            rows_read += 1;

            if row_idx % sample_stride != 0 {
                continue;
            }

            let raw_timestamp = record.get(timestamp_idx).unwrap_or_default();
            let date = parse_timestamp(raw_timestamp).ok_or_else(|| Error::TimestampParseError {
                line: record
                    .position()
                    .map_or(row_idx as u64 + 2, |position| position.line()),
                value: raw_timestamp.to_string(),
            })?;

            let body = match record.get(body_idx) {
                Some(body) if !body.is_empty() => body,
                _ => {
                    debug!("Skipping row {} with empty body", row_idx + 1);
                    continue;
                }
            };

            posts.push(Post::new(body, date));
        }

        // Stable sort, so posts sharing a date keep their corpus order
        posts.sort_by_key(|post| post.date);

        info!("Loaded {} of {} messages", posts.len(), rows_read);

        Ok(posts)
    }
}
