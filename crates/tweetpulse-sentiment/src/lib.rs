//! Tweet sentiment pipeline for tweetpulse.
//!
//! Collects tweets from the Twitter v1.1 standard search API, strips mentions,
//! links and symbols from their text, and scores each one with an embedded
//! polarity/subjectivity lexicon. Each stage takes the record table by value
//! and hands it on to the next.

pub mod classifier;
pub mod cleaner;
pub mod error;
pub mod pipeline;
pub mod scorer;
pub mod sources;
pub mod types;

pub use classifier::{classify, classify_records, Classification};
pub use cleaner::{clean_records, clean_text};
pub use error::SentimentError;
pub use pipeline::{analyze_records, collect_records, run_sentiment};
pub use scorer::lexicon_score;
pub use sources::TwitterClient;
pub use types::SearchParams;
