use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Discrete sentiment class derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// All labels, in the order the chart palette is declared.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Negative,
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
    ];

    /// Map a polarity score to a label.
    ///
    /// Exact zero is `Neutral`; there is no tolerance band around it.
    #[must_use]
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(SentimentLabel::Positive),
            "Negative" => Ok(SentimentLabel::Negative),
            "Neutral" => Ok(SentimentLabel::Neutral),
            other => Err(CoreError::InvalidLabel(other.to_string())),
        }
    }
}

/// Polarity/subjectivity pair produced by the lexicon scorer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentiment {
    /// In `[-1.0, 1.0]`.
    pub polarity: f64,
    /// In `[0.0, 1.0]`.
    pub subjectivity: f64,
}

/// One fetched tweet plus its derived fields.
///
/// The collector fills the raw fields; `clean_text` is set by the cleaner and
/// the sentiment fields by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub text: String,
    pub clean_text: Option<String>,
    pub user_location: String,
    pub created_at: DateTime<Utc>,
    pub user_name: String,
    pub user_id: u64,
    pub tweet_id: u64,
    pub source: String,
    pub user_statuses_count: u64,
    pub user_followers: u64,
    pub user_verified: bool,
    pub favorite_count: u64,
    pub retweet_count: u64,
    pub sentiment: Option<SentimentLabel>,
    pub polarity: Option<f64>,
    pub subjectivity: Option<f64>,
}

impl Record {
    /// Text the classifier should read: the cleaned text when present.
    #[must_use]
    pub fn analysis_text(&self) -> &str {
        self.clean_text.as_deref().unwrap_or(&self.text)
    }
}
