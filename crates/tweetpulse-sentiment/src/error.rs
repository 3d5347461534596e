use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Twitter auth error: {0}")]
    Auth(String),

    #[error("Twitter API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed tweet {tweet_id}: {reason}")]
    MalformedTweet { tweet_id: u64, reason: String },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("pagination limit reached for \"{query}\": exceeded {max_pages} pages")]
    PaginationLimit { query: String, max_pages: usize },
}
