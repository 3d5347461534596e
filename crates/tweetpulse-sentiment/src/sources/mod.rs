//! Tweet sources.

mod twitter;
mod twitter_types;

pub use twitter::TwitterClient;
pub use twitter_types::{SearchMetadata, SearchResponse, Status, User};
