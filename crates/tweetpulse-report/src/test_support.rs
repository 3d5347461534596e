use chrono::TimeZone;
use tweetpulse_core::{Record, SentimentLabel};

pub(crate) fn labelled_record(tweet_id: u64, text: &str, label: Option<SentimentLabel>) -> Record {
    Record {
        text: text.to_string(),
        clean_text: Some(text.to_string()),
        user_location: String::new(),
        created_at: chrono::Utc
            .with_ymd_and_hms(2021, 3, 3, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp"),
        user_name: "user".to_string(),
        user_id: 1,
        tweet_id,
        source: "Twitter Web App".to_string(),
        user_statuses_count: 0,
        user_followers: 0,
        user_verified: false,
        favorite_count: 0,
        retweet_count: 0,
        sentiment: label,
        polarity: label.map(|l| match l {
            SentimentLabel::Positive => 0.5,
            SentimentLabel::Negative => -0.5,
            SentimentLabel::Neutral => 0.0,
        }),
        subjectivity: label.map(|_| 0.5),
    }
}
