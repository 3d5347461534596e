//! Frequency tallies over words and sentiment labels.

use std::collections::HashMap;
use std::hash::Hash;

use tweetpulse_core::{Record, SentimentLabel};

/// Count occurrences, most common first. Ties keep first-seen order.
#[must_use]
pub fn tally<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut order: Vec<T> = Vec::new();
    let mut counts: HashMap<T, usize> = HashMap::new();
    for item in items {
        let count = counts.entry(item.clone()).or_insert(0);
        if *count == 0 {
            order.push(item);
        }
        *count += 1;
    }

    let mut tallied: Vec<(T, usize)> = order
        .into_iter()
        .map(|item| {
            let count = counts.get(&item).copied().unwrap_or_default();
            (item, count)
        })
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    tallied.sort_by(|a, b| b.1.cmp(&a.1));
    tallied
}

/// Whitespace-split word counts across `texts`.
#[must_use]
pub fn word_frequencies<'a, I>(texts: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    tally(
        texts
            .into_iter()
            .flat_map(str::split_whitespace)
            .map(str::to_string),
    )
}

/// Count of each sentiment label across classified records.
///
/// Records without a label are not counted.
#[must_use]
pub fn label_frequencies(records: &[Record]) -> Vec<(SentimentLabel, usize)> {
    tally(records.iter().filter_map(|r| r.sentiment))
}
