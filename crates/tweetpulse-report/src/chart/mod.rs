//! Sentiment pie chart: slice layout plus PNG rendering.

mod font;
mod render;

pub use render::{render_pie_chart, save_pie_chart};

use tweetpulse_core::SentimentLabel;

/// First slice starts at 12 o'clock; slices run counter-clockwise.
pub const START_ANGLE_DEG: f64 = 90.0;

pub const CHART_TITLE: &str = "Sentiment analysis";

/// Fixed colour per label.
#[must_use]
pub fn label_color(label: SentimentLabel) -> [u8; 3] {
    match label {
        SentimentLabel::Negative => [0xff, 0x99, 0xff],
        SentimentLabel::Positive => [0xb3, 0xff, 0x99],
        SentimentLabel::Neutral => [0xff, 0xe6, 0x99],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: SentimentLabel,
    pub count: usize,
    /// Share of the total in `(0.0, 1.0]`.
    pub fraction: f64,
    /// Degrees counter-clockwise from 3 o'clock.
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub color: [u8; 3],
}

impl PieSlice {
    /// Percentage to one decimal, e.g. `"33.3%"`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }

    #[must_use]
    pub fn mid_angle_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg / 2.0
    }

    /// Whether `angle_deg` (any range) falls inside this slice.
    #[must_use]
    pub fn contains_angle(&self, angle_deg: f64) -> bool {
        if self.sweep_deg >= 360.0 {
            return true;
        }
        let offset = (angle_deg - self.start_deg).rem_euclid(360.0);
        offset < self.sweep_deg
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Lay out one slice per label with a non-zero count, in the given order.
    ///
    /// Returns `None` when there is nothing to draw.
    #[must_use]
    pub fn from_frequencies(freqs: &[(SentimentLabel, usize)]) -> Option<Self> {
        let total: usize = freqs.iter().map(|(_, n)| n).sum();
        if total == 0 {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let total = total as f64;
        let mut start = START_ANGLE_DEG;
        let slices = freqs
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|&(label, count)| {
                #[allow(clippy::cast_precision_loss)]
                let fraction = count as f64 / total;
                let sweep = fraction * 360.0;
                let slice = PieSlice {
                    label,
                    count,
                    fraction,
                    start_deg: start,
                    sweep_deg: sweep,
                    color: label_color(label),
                };
                start += sweep;
                slice
            })
            .collect();

        Some(Self {
            title: CHART_TITLE.to_string(),
            slices,
        })
    }

    /// Slice covering `angle_deg`, if any.
    #[must_use]
    pub fn slice_at(&self, angle_deg: f64) -> Option<&PieSlice> {
        self.slices.iter().find(|s| s.contains_angle(angle_deg))
    }
}
