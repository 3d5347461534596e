//! Tweet text cleanup ahead of scoring.

use std::sync::LazyLock;

use regex::Regex;
use tweetpulse_core::Record;

/// Mentions, any character outside `[0-9A-Za-z'\t]`, and whole URLs.
///
/// Branches are tried leftmost-first, so a URL that starts a word is removed
/// in one piece by the last branch.
static NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(@[A-Za-z0-9]+)|([^0-9A-Za-z'\t])|(\w+://\S+)").expect("valid noise regex")
});

/// Strip mentions, links, emoji and punctuation (apostrophes survive), then
/// collapse runs of whitespace to single spaces.
#[must_use]
pub fn clean_text(text: &str) -> String {
    NOISE
        .replace_all(text, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fill `clean_text` on every record, preserving order.
#[must_use]
pub fn clean_records(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .map(|mut record| {
            record.clean_text = Some(clean_text(&record.text));
            record
        })
        .collect()
}
