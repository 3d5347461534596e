//! Flat-file export of the record table.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;
use tweetpulse_core::{Record, SentimentLabel};

use crate::error::ReportError;

/// Header row, one column per record field, in output order.
pub const CSV_HEADERS: [&str; 16] = [
    "Tweets",
    "Clean_tweets",
    "User_location",
    "Tweet_date",
    "User",
    "User_ID",
    "Tweet_ID",
    "Source",
    "User_statuses_count",
    "User_followers",
    "User_verified",
    "Favourite_count",
    "Re_tweet_count",
    "Sentiment",
    "Polarity",
    "Subjectivity",
];

/// Field order must match [`CSV_HEADERS`].
#[derive(Serialize)]
struct CsvRow<'a> {
    text: &'a str,
    clean_text: Option<&'a str>,
    user_location: &'a str,
    created_at: String,
    user_name: &'a str,
    user_id: u64,
    tweet_id: u64,
    source: &'a str,
    user_statuses_count: u64,
    user_followers: u64,
    user_verified: bool,
    favorite_count: u64,
    retweet_count: u64,
    sentiment: Option<SentimentLabel>,
    polarity: Option<f64>,
    subjectivity: Option<f64>,
}

impl<'a> From<&'a Record> for CsvRow<'a> {
    fn from(r: &'a Record) -> Self {
        Self {
            text: &r.text,
            clean_text: r.clean_text.as_deref(),
            user_location: &r.user_location,
            created_at: r.created_at.to_rfc3339(),
            user_name: &r.user_name,
            user_id: r.user_id,
            tweet_id: r.tweet_id,
            source: &r.source,
            user_statuses_count: r.user_statuses_count,
            user_followers: r.user_followers,
            user_verified: r.user_verified,
            favorite_count: r.favorite_count,
            retweet_count: r.retweet_count,
            sentiment: r.sentiment,
            polarity: r.polarity,
            subjectivity: r.subjectivity,
        }
    }
}

/// Write the header row and one row per record. No index column.
///
/// The header is written even for an empty table.
///
/// # Errors
///
/// Returns [`ReportError::Csv`] if a row cannot be written or flushed.
pub fn write_csv<W: io::Write>(writer: W, records: &[Record]) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the table to it.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be created, or
/// [`ReportError::Csv`] if writing fails.
pub fn write_csv_file(path: &Path, records: &[Record]) -> Result<(), ReportError> {
    let file = File::create(path)?;
    write_csv(file, records)?;
    tracing::info!(path = %path.display(), rows = records.len(), "wrote CSV table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record(text: &str) -> Record {
        Record {
            text: text.to_string(),
            clean_text: Some("clean, text".to_string()),
            user_location: "London".to_string(),
            created_at: chrono::Utc
                .with_ymd_and_hms(2021, 3, 3, 19, 17, 31)
                .single()
                .unwrap(),
            user_name: "Jane \"JJ\" Doe".to_string(),
            user_id: 99,
            tweet_id: 1_367_000_000_000_000_001,
            source: "Twitter for iPhone".to_string(),
            user_statuses_count: 4000,
            user_followers: 250,
            user_verified: true,
            favorite_count: 12,
            retweet_count: 3,
            sentiment: Some(SentimentLabel::Positive),
            polarity: Some(0.5),
            subjectivity: Some(0.6),
        }
    }

    fn write_to_string(records: &[Record]) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_table_still_has_header() {
        let out = write_to_string(&[]);
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("Tweets,Clean_tweets,User_location,Tweet_date,"));
        assert!(out.trim_end().ends_with("Sentiment,Polarity,Subjectivity"));
    }

    #[test]
    fn row_has_all_columns_in_order() {
        let out = write_to_string(&[record("I love vaccines!")]);
        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADERS.to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.len(), CSV_HEADERS.len());
        assert_eq!(&row[0], "I love vaccines!");
        assert_eq!(&row[1], "clean, text");
        assert_eq!(&row[3], "2021-03-03T19:17:31+00:00");
        assert_eq!(&row[4], "Jane \"JJ\" Doe");
        assert_eq!(&row[6], "1367000000000000001");
        assert_eq!(&row[10], "true");
        assert_eq!(&row[13], "Positive");
        assert_eq!(&row[14], "0.5");
        assert_eq!(&row[15], "0.6");
    }

    #[test]
    fn unclassified_fields_are_empty_cells() {
        let mut r = record("raw");
        r.clean_text = None;
        r.sentiment = None;
        r.polarity = None;
        r.subjectivity = None;
        let out = write_to_string(&[r]);
        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[1], "");
        assert_eq!(&row[13], "");
        assert_eq!(&row[14], "");
        assert_eq!(&row[15], "");
    }

    #[test]
    fn multiline_text_survives_quoting() {
        let out = write_to_string(&[record("line one\nline two, with comma")]);
        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "line one\nline two, with comma");
    }
}
