//! Wire types for the v1.1 search response and their conversion to [`Record`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tweetpulse_core::Record;

use crate::error::SentimentError;

/// `created_at` format used throughout the v1.1 API, e.g.
/// `Wed Mar 03 19:17:31 +0000 2021`.
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) token_type: String,
    pub(crate) access_token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrors {
    #[serde(default)]
    pub(crate) errors: Vec<ApiErrorItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorItem {
    #[serde(default)]
    pub(crate) code: i64,
    pub(crate) message: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub statuses: Vec<Status>,
    pub search_metadata: Option<SearchMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct SearchMetadata {
    /// Query string for the next page; absent on the last page.
    pub next_results: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Status {
    pub id: u64,
    pub created_at: String,
    /// Present with `tweet_mode=extended`.
    pub full_text: Option<String>,
    /// Present in compatibility mode.
    pub text: Option<String>,
    #[serde(default)]
    pub source: String,
    pub in_reply_to_status_id: Option<u64>,
    pub retweeted_status: Option<serde_json::Value>,
    #[serde(default)]
    pub favorite_count: u64,
    #[serde(default)]
    pub retweet_count: u64,
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub location: Option<String>,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub statuses_count: u64,
    #[serde(default)]
    pub verified: bool,
}

impl Status {
    /// Retweets and replies are excluded from the table.
    #[must_use]
    pub fn is_retweet_or_reply(&self) -> bool {
        self.retweeted_status.is_some() || self.in_reply_to_status_id.is_some()
    }

    /// Convert to a [`Record`] with the raw and metadata fields populated.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::MalformedTweet`] if the tweet has no text or
    /// its timestamp cannot be parsed.
    pub fn into_record(self) -> Result<Record, SentimentError> {
        let tweet_id = self.id;
        let created_at = parse_created_at(&self.created_at).map_err(|e| {
            SentimentError::MalformedTweet {
                tweet_id,
                reason: format!("bad created_at {:?}: {e}", self.created_at),
            }
        })?;
        let text = self
            .full_text
            .or(self.text)
            .ok_or_else(|| SentimentError::MalformedTweet {
                tweet_id,
                reason: "no text field".to_string(),
            })?;

        Ok(Record {
            text,
            clean_text: None,
            user_location: self.user.location.unwrap_or_default(),
            created_at,
            user_name: self.user.name,
            user_id: self.user.id,
            tweet_id,
            source: source_label(&self.source).to_string(),
            user_statuses_count: self.user.statuses_count,
            user_followers: self.user.followers_count,
            user_verified: self.user.verified,
            favorite_count: self.favorite_count,
            retweet_count: self.retweet_count,
            sentiment: None,
            polarity: None,
            subjectivity: None,
        })
    }
}

pub(crate) fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_str(raw, CREATED_AT_FORMAT).map(|dt| dt.with_timezone(&Utc))
}

/// Client name from the `source` field, which arrives as an HTML anchor:
/// `<a href="..." rel="nofollow">Twitter for iPhone</a>`.
pub(crate) fn source_label(raw: &str) -> &str {
    let Some(open_end) = raw.find('>') else {
        return raw.trim();
    };
    let rest = &raw[open_end + 1..];
    match rest.find('<') {
        Some(close) => rest[..close].trim(),
        None => rest.trim(),
    }
}
