use tweetpulse_core::{AppConfig, Geocode};

/// Parameters for one search run against the standard search endpoint.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Search phrase; retweet and reply exclusions are appended when the
    /// request is built.
    pub query: String,
    pub geocode: Geocode,
    pub lang: String,
    /// Tweets requested per page (API maximum 100).
    pub page_size: u32,
    /// Hard cap on the number of records returned.
    pub max_records: usize,
}

impl SearchParams {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            query: config.query.clone(),
            geocode: config.geocode.clone(),
            lang: config.lang.clone(),
            page_size: config.page_size,
            max_records: config.max_records,
        }
    }

    /// The `q` parameter sent to the API.
    #[must_use]
    pub fn search_query(&self) -> String {
        format!("{} -filter:retweets -filter:replies", self.query.trim())
    }
}

#[cfg(test)]
pub(crate) fn test_record(tweet_id: u64, text: &str) -> tweetpulse_core::Record {
    use chrono::TimeZone;

    tweetpulse_core::Record {
        text: text.to_string(),
        clean_text: None,
        user_location: "London".to_string(),
        created_at: chrono::Utc
            .with_ymd_and_hms(2021, 3, 3, 19, 17, 31)
            .single()
            .expect("valid fixture timestamp"),
        user_name: "Test User".to_string(),
        user_id: 42,
        tweet_id,
        source: "Twitter Web App".to_string(),
        user_statuses_count: 100,
        user_followers: 10,
        user_verified: false,
        favorite_count: 0,
        retweet_count: 0,
        sentiment: None,
        polarity: None,
        subjectivity: None,
    }
}
