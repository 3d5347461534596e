//! Sentiment pipeline orchestration.

use tweetpulse_core::{AppConfig, Record};

use crate::classifier::classify_records;
use crate::cleaner::clean_records;
use crate::error::SentimentError;
use crate::sources::TwitterClient;
use crate::types::SearchParams;

/// Collect tweets for the configured search.
///
/// # Errors
///
/// Returns [`SentimentError`] if authentication fails or any page request
/// fails. Nothing is retried and no partial table is returned.
pub async fn collect_records(config: &AppConfig) -> Result<Vec<Record>, SentimentError> {
    let client = TwitterClient::connect(
        &config.credentials,
        &config.api_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .await?;

    let params = SearchParams::from_config(config);
    tracing::info!(
        query = %params.search_query(),
        geocode = %params.geocode,
        lang = %params.lang,
        max_records = params.max_records,
        "collecting tweets"
    );

    let records = client.search_all(&params).await?;
    tracing::info!(count = records.len(), "collection finished");
    Ok(records)
}

/// Clean and classify a collected table.
#[must_use]
pub fn analyze_records(records: Vec<Record>) -> Vec<Record> {
    let records = clean_records(records);
    tracing::debug!(count = records.len(), "texts cleaned");
    classify_records(records)
}

/// Run the full pipeline: collect, clean, classify.
///
/// # Errors
///
/// Propagates any error from [`collect_records`].
pub async fn run_sentiment(config: &AppConfig) -> Result<Vec<Record>, SentimentError> {
    let records = collect_records(config).await?;
    Ok(analyze_records(records))
}
