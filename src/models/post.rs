use crate::utils::normalize_body;
use chrono::NaiveDate;

/// A single social-media message, reduced to what the indexer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Normalized body: upper case letters and whitespace only.
    pub body: String,
    pub date: NaiveDate,
}

impl Post {
    /// Builds a post from a raw message body, normalizing the text.
    pub fn new(raw_body: &str, date: NaiveDate) -> Self {
        Post {
            body: normalize_body(raw_body),
            date,
        }
    }

    /// Whitespace-delimited tokens of the normalized body.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.body.split_whitespace()
    }

    /// Counts whole-word occurrences of `symbol` within the body.
    pub fn count_occurrences(&self, symbol: &str) -> u64 {
        self.tokens().filter(|token| *token == symbol).count() as u64
    }
}
