//! Output stage for tweetpulse: the CSV table, label tallies, and the
//! sentiment pie chart.

pub mod chart;
pub mod error;
pub mod frequency;
pub mod preview;
pub mod table;

pub use chart::{render_pie_chart, save_pie_chart, PieChart, PieSlice};
pub use error::ReportError;
pub use frequency::{label_frequencies, tally, word_frequencies};
pub use preview::format_preview;
pub use table::{write_csv, write_csv_file, CSV_HEADERS};

#[cfg(test)]
mod test_support;
