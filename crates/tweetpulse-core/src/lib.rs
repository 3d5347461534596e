//! Shared domain types and configuration for tweetpulse.

pub mod app_config;
pub mod config;
pub mod record;

pub use app_config::{AppConfig, Geocode, TwitterCredentials};
pub use config::{
    load_app_config, load_app_config_from_env, load_log_level, DEFAULT_API_BASE_URL,
    DEFAULT_LOG_LEVEL, MAX_PAGE_SIZE,
};
pub use record::{Record, Sentiment, SentimentLabel};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid sentiment label: {0}")]
    InvalidLabel(String),

    #[error("invalid geocode \"{input}\": {reason}")]
    InvalidGeocode { input: String, reason: String },
}
