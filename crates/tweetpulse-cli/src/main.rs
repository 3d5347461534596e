mod run;

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use run::RunOverrides;

#[derive(Debug, Parser)]
#[command(name = "tweetpulse")]
#[command(about = "Collect tweets, score their sentiment, and report the results")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect, clean, and classify tweets, then write the CSV table and pie chart
    Run {
        /// Search phrase (overrides `TWEETPULSE_QUERY`)
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        query: Option<String>,

        /// Maximum number of tweets to collect (overrides `TWEETPULSE_MAX_RECORDS`)
        #[arg(long)]
        max_records: Option<usize>,

        /// Output path for the CSV table (overrides `TWEETPULSE_CSV_PATH`)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output path for the pie chart (overrides `TWEETPULSE_CHART_PATH`)
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Also print the N most common words across the cleaned tweets
        #[arg(long, default_value_t = 0)]
        top_words: usize,
    },
    /// Clean and classify a single text without touching the network
    Classify {
        text: String,
    },
    /// Print the cleaned form of a single text
    Clean {
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Run {
            query,
            max_records,
            csv,
            chart,
            top_words,
        }) => {
            let overrides = RunOverrides {
                query,
                max_records,
                csv_path: csv,
                chart_path: chart,
            };
            run::run_pipeline(overrides, top_words).await?;
        }
        Some(Commands::Classify { text }) => run::run_classify(&text),
        Some(Commands::Clean { text }) => println!("{}", tweetpulse_sentiment::clean_text(&text)),
        None => println!("tweetpulse: try `tweetpulse run` or `tweetpulse --help`"),
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `TWEETPULSE_LOG_LEVEL`, then `info`.
fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(tweetpulse_core::load_log_level()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
