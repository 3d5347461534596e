//! Twitter v1.1 standard search client (application-only OAuth 2).

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use tweetpulse_core::{Record, TwitterCredentials};

use super::twitter_types::{ApiErrors, SearchResponse, TokenResponse};
use crate::error::SentimentError;
use crate::types::SearchParams;

/// Guard against a `max_id` cursor that never advances.
pub(crate) const MAX_PAGES: usize = 1_000;

/// Client for the standard search endpoint, holding a bearer token.
///
/// Use [`TwitterClient::connect`] to exchange consumer credentials for a
/// token, or [`TwitterClient::with_bearer_token`] when a token is already
/// known. Both accept a base URL so tests can point at a mock server.
pub struct TwitterClient {
    client: Client,
    base_url: Url,
    token: String,
}

impl TwitterClient {
    /// Build a client from configured credentials.
    ///
    /// A configured bearer token is used as-is; otherwise the consumer key and
    /// secret are exchanged for one at `oauth2/token`.
    ///
    /// # Errors
    ///
    /// - [`SentimentError::Auth`] if no usable credentials are configured or
    ///   the token exchange is rejected.
    /// - [`SentimentError::Http`] if the HTTP client cannot be built or the
    ///   exchange request fails.
    /// - [`SentimentError::InvalidBaseUrl`] if `base_url` does not parse.
    pub async fn connect(
        credentials: &TwitterCredentials,
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SentimentError> {
        if let Some(token) = &credentials.bearer_token {
            return Self::with_bearer_token(token, base_url, timeout_secs, user_agent);
        }

        let (Some(key), Some(secret)) = (&credentials.consumer_key, &credentials.consumer_secret)
        else {
            return Err(SentimentError::Auth(
                "no bearer token and no consumer key/secret configured".to_string(),
            ));
        };

        let client = build_http_client(timeout_secs, user_agent)?;
        let base_url = normalise_base_url(base_url)?;
        let token = Self::fetch_token(&client, &base_url, key, secret).await?;
        tracing::debug!("obtained application bearer token");

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Build a client around an existing bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the HTTP client cannot be built,
    /// or [`SentimentError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_bearer_token(
        token: &str,
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SentimentError> {
        Ok(Self {
            client: build_http_client(timeout_secs, user_agent)?,
            base_url: normalise_base_url(base_url)?,
            token: token.to_owned(),
        })
    }

    async fn fetch_token(
        client: &Client,
        base_url: &Url,
        consumer_key: &str,
        consumer_secret: &str,
    ) -> Result<String, SentimentError> {
        let url = join(base_url, "oauth2/token")?;
        let response = client
            .post(url)
            .basic_auth(consumer_key, Some(consumer_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SentimentError::Auth(format!(
                "token exchange failed with status {status}: {}",
                first_error_message(&body).unwrap_or_else(|| "no message".to_string())
            )));
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| SentimentError::Deserialize {
                context: "oauth2/token".to_string(),
                source: e,
            })?;
        if !token.token_type.eq_ignore_ascii_case("bearer") {
            return Err(SentimentError::Auth(format!(
                "unexpected token type {:?}",
                token.token_type
            )));
        }

        Ok(token.access_token)
    }

    /// Fetch one page of search results.
    ///
    /// `max_id` pages backwards from the newest results: pass `None` for the
    /// first page, then one less than the smallest id already seen.
    ///
    /// # Errors
    ///
    /// - [`SentimentError::Api`] on a non-2xx response.
    /// - [`SentimentError::Http`] on network failure.
    /// - [`SentimentError::Deserialize`] if the body is not a search response.
    pub async fn search_page(
        &self,
        params: &SearchParams,
        count: u32,
        max_id: Option<u64>,
    ) -> Result<SearchResponse, SentimentError> {
        let url = self.search_url(params, count, max_id)?;
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| SentimentError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Page through search results until the source is exhausted or
    /// `params.max_records` tweets have been collected.
    ///
    /// Retweets and replies are dropped even if the API returns them. Records
    /// come back in fetch order (newest first).
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::search_page`] or from converting a
    /// status into a record. Returns [`SentimentError::PaginationLimit`] after
    /// [`MAX_PAGES`] pages.
    pub async fn search_all(&self, params: &SearchParams) -> Result<Vec<Record>, SentimentError> {
        let mut records: Vec<Record> = Vec::new();
        let mut max_id: Option<u64> = None;
        let mut page_count = 0usize;

        while records.len() < params.max_records {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(SentimentError::PaginationLimit {
                    query: params.query.clone(),
                    max_pages: MAX_PAGES,
                });
            }

            let remaining = params.max_records - records.len();
            let count = u32::try_from(remaining)
                .unwrap_or(u32::MAX)
                .min(params.page_size);

            let page = self.search_page(params, count, max_id).await?;
            let has_next = page
                .search_metadata
                .as_ref()
                .is_some_and(|m| m.next_results.is_some());

            let Some(oldest) = page.statuses.iter().map(|s| s.id).min() else {
                break;
            };

            let fetched = page.statuses.len();
            for status in page.statuses {
                if records.len() >= params.max_records {
                    break;
                }
                if status.is_retweet_or_reply() {
                    continue;
                }
                records.push(status.into_record()?);
            }

            tracing::info!(
                page = page_count,
                fetched,
                collected = records.len(),
                "search page collected"
            );

            if !has_next {
                break;
            }
            match oldest.checked_sub(1) {
                Some(next) if max_id.is_none_or(|prev| next < prev) => max_id = Some(next),
                _ => break,
            }
        }

        Ok(records)
    }

    /// Build the search URL with all query parameters percent-encoded.
    fn search_url(
        &self,
        params: &SearchParams,
        count: u32,
        max_id: Option<u64>,
    ) -> Result<Url, SentimentError> {
        let mut url = join(&self.base_url, "1.1/search/tweets.json")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &params.search_query());
            pairs.append_pair("geocode", &params.geocode.to_string());
            pairs.append_pair("lang", &params.lang);
            pairs.append_pair("count", &count.to_string());
            pairs.append_pair("result_type", "recent");
            pairs.append_pair("tweet_mode", "extended");
            pairs.append_pair("include_entities", "false");
            if let Some(id) = max_id {
                pairs.append_pair("max_id", &id.to_string());
            }
        }
        Ok(url)
    }
}

fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, SentimentError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?)
}

/// Ensure the base URL ends with exactly one slash so relative joins append
/// to it instead of replacing its last segment.
fn normalise_base_url(base_url: &str) -> Result<Url, SentimentError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| SentimentError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })
}

fn join(base_url: &Url, path: &str) -> Result<Url, SentimentError> {
    base_url
        .join(path)
        .map_err(|e| SentimentError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })
}

fn first_error_message(body: &str) -> Option<String> {
    let parsed: ApiErrors = serde_json::from_str(body).ok()?;
    parsed
        .errors
        .into_iter()
        .next()
        .map(|e| format!("{} (code {})", e.message, e.code))
}

fn api_error(status: StatusCode, body: &str) -> SentimentError {
    SentimentError::Api {
        status: status.as_u16(),
        message: first_error_message(body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SearchParams {
        SearchParams {
            query: "vaccine".to_string(),
            geocode: "51.5073219,-0.1276474,30mi".parse().unwrap(),
            lang: "en".to_string(),
            page_size: 100,
            max_records: 20_000,
        }
    }

    fn test_client(base_url: &str) -> TwitterClient {
        TwitterClient::with_bearer_token("test-token", base_url, 5, "tweetpulse-test/0.1")
            .expect("client construction should not fail")
    }

    #[test]
    fn search_url_carries_all_filters() {
        let client = test_client("https://api.twitter.com");
        let url = client.search_url(&params(), 100, None).unwrap();
        assert_eq!(url.path(), "/1.1/search/tweets.json");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let get = |k: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == k)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("q"), Some("vaccine -filter:retweets -filter:replies"));
        assert_eq!(get("geocode"), Some("51.5073219,-0.1276474,30mi"));
        assert_eq!(get("lang"), Some("en"));
        assert_eq!(get("count"), Some("100"));
        assert_eq!(get("tweet_mode"), Some("extended"));
        assert_eq!(get("max_id"), None);
    }

    #[test]
    fn search_url_includes_max_id_on_later_pages() {
        let client = test_client("https://api.twitter.com/");
        let url = client.search_url(&params(), 40, Some(1234)).unwrap();
        assert!(url.as_str().contains("max_id=1234"), "{url}");
        assert!(url.as_str().contains("count=40"), "{url}");
    }

    #[test]
    fn base_url_with_path_prefix_is_kept() {
        let client = test_client("http://127.0.0.1:9000/proxy");
        let url = client.search_url(&params(), 10, None).unwrap();
        assert_eq!(url.path(), "/proxy/1.1/search/tweets.json");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = TwitterClient::with_bearer_token("t", "not a url", 5, "ua");
        assert!(matches!(result, Err(SentimentError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn api_error_uses_first_twitter_message() {
        let body = r#"{"errors":[{"code":32,"message":"Could not authenticate you."}]}"#;
        let err = api_error(StatusCode::UNAUTHORIZED, body);
        assert!(matches!(
            err,
            SentimentError::Api { status: 401, ref message } if message.contains("Could not authenticate you.")
        ));
    }

    #[test]
    fn api_error_falls_back_to_reason_phrase() {
        let err = api_error(StatusCode::SERVICE_UNAVAILABLE, "<html>down</html>");
        assert!(matches!(
            err,
            SentimentError::Api { status: 503, ref message } if message == "Service Unavailable"
        ));
    }

    #[tokio::test]
    async fn connect_without_credentials_is_auth_error() {
        let creds = TwitterCredentials::default();
        let result =
            TwitterClient::connect(&creds, tweetpulse_core::DEFAULT_API_BASE_URL, 5, "ua").await;
        assert!(matches!(result, Err(SentimentError::Auth(_))));
    }
}
