use crate::app_config::{AppConfig, Geocode, TwitterCredentials};
use crate::ConfigError;

/// Largest page the standard search endpoint will return.
pub const MAX_PAGE_SIZE: u32 = 100;

pub const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Log filter directive from `TWEETPULSE_LOG_LEVEL`, or [`DEFAULT_LOG_LEVEL`].
///
/// Kept out of [`AppConfig`] so commands that never load credentials can
/// still configure logging.
#[must_use]
pub fn load_log_level() -> String {
    resolve_log_level(|key| std::env::var(key))
}

fn resolve_log_level<F>(lookup: F) -> String
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    lookup("TWEETPULSE_LOG_LEVEL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Build application configuration using the provided env-var lookup function.
///
/// Tested with a pure `HashMap` lookup so no `set_var`/`remove_var` is needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| invalid(var, e.to_string()))
    };

    let credentials = TwitterCredentials {
        consumer_key: optional("TWITTER_CONSUMER_KEY"),
        consumer_secret: optional("TWITTER_CONSUMER_SECRET"),
        access_token: optional("TWITTER_ACCESS_TOKEN"),
        access_token_secret: optional("TWITTER_ACCESS_TOKEN_SECRET"),
        bearer_token: optional("TWITTER_BEARER_TOKEN"),
    };

    if credentials.bearer_token.is_none() {
        if credentials.consumer_key.is_none() {
            return Err(ConfigError::MissingEnvVar(
                "TWITTER_CONSUMER_KEY".to_string(),
            ));
        }
        if credentials.consumer_secret.is_none() {
            return Err(ConfigError::MissingEnvVar(
                "TWITTER_CONSUMER_SECRET".to_string(),
            ));
        }
    }

    let api_base_url = or_default("TWEETPULSE_API_BASE_URL", DEFAULT_API_BASE_URL);

    let query = or_default("TWEETPULSE_QUERY", "vaccine");
    if query.trim().is_empty() {
        return Err(invalid("TWEETPULSE_QUERY", "must not be empty".to_string()));
    }

    let geocode: Geocode = or_default("TWEETPULSE_GEOCODE", "51.5073219,-0.1276474,30mi")
        .parse()
        .map_err(|e: crate::CoreError| invalid("TWEETPULSE_GEOCODE", e.to_string()))?;

    let lang = or_default("TWEETPULSE_LANG", "en");

    let page_size = parse_u32("TWEETPULSE_PAGE_SIZE", "100")?;
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(invalid(
            "TWEETPULSE_PAGE_SIZE",
            format!("must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"),
        ));
    }

    let max_records = parse_usize("TWEETPULSE_MAX_RECORDS", "20000")?;
    let csv_path = PathBuf::from(or_default("TWEETPULSE_CSV_PATH", "sentiment.csv"));
    let chart_path = PathBuf::from(or_default("TWEETPULSE_CHART_PATH", "sentiment.png"));
    let request_timeout_secs = parse_u64("TWEETPULSE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("TWEETPULSE_USER_AGENT", "tweetpulse/0.1 (sentiment)");

    Ok(AppConfig {
        credentials,
        api_base_url,
        query,
        geocode,
        lang,
        page_size,
        max_records,
        csv_path,
        chart_path,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
