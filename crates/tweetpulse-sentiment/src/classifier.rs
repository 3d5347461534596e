//! Sentiment labelling on top of [`lexicon_score`].

use tweetpulse_core::{Record, Sentiment, SentimentLabel};

use crate::scorer::lexicon_score;

/// Label plus the raw score it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: SentimentLabel,
    pub sentiment: Sentiment,
}

/// Score `text` and map its polarity to a label.
#[must_use]
pub fn classify(text: &str) -> Classification {
    let sentiment = lexicon_score(text);
    Classification {
        label: SentimentLabel::from_polarity(sentiment.polarity),
        sentiment,
    }
}

/// Classify every record from its cleaned text (raw text if it was never
/// cleaned), preserving order.
#[must_use]
pub fn classify_records(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .map(|mut record| {
            let result = classify(record.analysis_text());
            record.sentiment = Some(result.label);
            record.polarity = Some(result.sentiment.polarity);
            record.subjectivity = Some(result.sentiment.subjectivity);
            record
        })
        .collect()
}
