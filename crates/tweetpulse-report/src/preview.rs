use tweetpulse_core::Record;

const TEXT_WIDTH: usize = 80;

/// Plain-text table of the first `limit` records for a quick visual check.
#[must_use]
pub fn format_preview(records: &[Record], limit: usize) -> String {
    let mut out = format!(
        "{:>4}  {:<8}  {:>8}  {:>8}  {}\n",
        "#", "label", "polarity", "subject", "text"
    );
    for (idx, record) in records.iter().take(limit).enumerate() {
        let label = record.sentiment.map_or("-", |l| l.as_str());
        let polarity = record
            .polarity
            .map_or_else(|| "-".to_string(), |p| format!("{p:.3}"));
        let subjectivity = record
            .subjectivity
            .map_or_else(|| "-".to_string(), |s| format!("{s:.3}"));
        let text: String = record.analysis_text().chars().take(TEXT_WIDTH).collect();
        out.push_str(&format!(
            "{idx:>4}  {label:<8}  {polarity:>8}  {subjectivity:>8}  {text}\n"
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use tweetpulse_core::SentimentLabel;

    use super::*;
    use crate::test_support::labelled_record;

    #[test]
    fn preview_is_capped_at_limit() {
        let records: Vec<Record> = (0..15)
            .map(|i| labelled_record(i, "text", Some(SentimentLabel::Neutral)))
            .collect();
        let out = format_preview(&records, 10);
        assert_eq!(out.lines().count(), 11);
    }

    #[test]
    fn preview_shows_label_and_scores() {
        let records = vec![labelled_record(1, "so good", Some(SentimentLabel::Positive))];
        let out = format_preview(&records, 10);
        let row = out.lines().nth(1).unwrap();
        assert!(row.contains("Positive"), "{row}");
        assert!(row.contains("0.500"), "{row}");
        assert!(row.ends_with("so good"), "{row}");
    }

    #[test]
    fn unclassified_rows_use_placeholders() {
        let records = vec![labelled_record(1, "raw", None)];
        let out = format_preview(&records, 10);
        let row = out.lines().nth(1).unwrap();
        assert!(row.contains(" - "), "{row}");
    }

    #[test]
    fn long_text_is_truncated() {
        let long = "x".repeat(200);
        let records = vec![labelled_record(1, &long, None)];
        let out = format_preview(&records, 1);
        let row = out.lines().nth(1).unwrap();
        assert!(row.ends_with(&"x".repeat(TEXT_WIDTH)));
        assert!(!row.contains(&"x".repeat(TEXT_WIDTH + 1)));
    }
}
