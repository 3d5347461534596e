//! Command handlers for `run` and `classify`.

use std::path::PathBuf;

use anyhow::Context;
use tracing::Instrument;
use tweetpulse_core::{AppConfig, Record};
use tweetpulse_report::{PieChart, PieSlice};

/// Number of rows printed by the post-run preview.
const PREVIEW_ROWS: usize = 10;

/// Command-line values that take precedence over the environment.
#[derive(Debug, Default)]
pub(crate) struct RunOverrides {
    pub query: Option<String>,
    pub max_records: Option<usize>,
    pub csv_path: Option<PathBuf>,
    pub chart_path: Option<PathBuf>,
}

impl RunOverrides {
    /// Overwrite the given fields of `config`.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving `config` untouched, if the query override is
    /// blank.
    pub(crate) fn apply(self, config: &mut AppConfig) -> anyhow::Result<()> {
        if let Some(query) = &self.query {
            anyhow::ensure!(!query.trim().is_empty(), "--query must not be blank");
        }
        if let Some(query) = self.query {
            config.query = query;
        }
        if let Some(max_records) = self.max_records {
            config.max_records = max_records;
        }
        if let Some(path) = self.csv_path {
            config.csv_path = path;
        }
        if let Some(path) = self.chart_path {
            config.chart_path = path;
        }
        Ok(())
    }
}

/// Collect, clean and classify, then write the CSV table and the pie chart.
///
/// With no tweets collected the chart is skipped, but the header-only CSV is
/// still written and the run succeeds.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the search API fails, or an
/// output file cannot be written.
pub(crate) async fn run_pipeline(overrides: RunOverrides, top_words: usize) -> anyhow::Result<()> {
    let mut config = tweetpulse_core::load_app_config().context("failed to load configuration")?;
    overrides.apply(&mut config)?;

    let run_id = uuid::Uuid::new_v4();
    execute(&config, top_words)
        .instrument(tracing::info_span!("run", %run_id))
        .await
}

async fn execute(config: &AppConfig, top_words: usize) -> anyhow::Result<()> {
    tracing::info!(query = %config.query, max_records = config.max_records, "starting sentiment run");

    let records = tweetpulse_sentiment::run_sentiment(config)
        .await
        .context("sentiment pipeline failed")?;

    print!("{}", tweetpulse_report::format_preview(&records, PREVIEW_ROWS));

    tweetpulse_report::write_csv_file(&config.csv_path, &records)
        .with_context(|| format!("failed to write {}", config.csv_path.display()))?;

    let freqs = tweetpulse_report::label_frequencies(&records);
    for (label, count) in &freqs {
        println!("{label}: {count}");
        tracing::info!(label = %label, count, "label tally");
    }

    if top_words > 0 {
        let words = tweetpulse_report::word_frequencies(records.iter().map(Record::analysis_text));
        println!("top words:");
        for (word, count) in words.iter().take(top_words) {
            println!("  {word:<20} {count}");
        }
    }

    match PieChart::from_frequencies(&freqs) {
        Some(chart) => {
            for line in legend_lines(&chart.slices) {
                println!("{line}");
            }
            tweetpulse_report::save_pie_chart(&chart, &config.chart_path)
                .with_context(|| format!("failed to write {}", config.chart_path.display()))?;
        }
        None => {
            tracing::warn!(
                path = %config.chart_path.display(),
                "no tweets collected; skipping pie chart"
            );
        }
    }

    tracing::info!(
        records = records.len(),
        csv = %config.csv_path.display(),
        "sentiment run finished"
    );
    Ok(())
}

/// Print the cleaned text with its label and scores.
pub(crate) fn run_classify(text: &str) {
    let cleaned = tweetpulse_sentiment::clean_text(text);
    let result = tweetpulse_sentiment::classify(&cleaned);
    println!("text:         {cleaned}");
    println!("label:        {}", result.label);
    println!("polarity:     {:.3}", result.sentiment.polarity);
    println!("subjectivity: {:.3}", result.sentiment.subjectivity);
}

/// One `"<label> <percent>"` line per slice, in chart order.
pub(crate) fn legend_lines(slices: &[PieSlice]) -> Vec<String> {
    slices
        .iter()
        .map(|s| format!("{} {}", s.label, s.percent_label()))
        .collect()
}
