//! Mapping of analysis results to display attributes.
//!
//! Everything here is a pure function of its input. Sentiment labels are
//! matched case-insensitively and anything unrecognized maps to neutral.

mod types;
mod view;

pub use types::{Sentiment, Tint};
pub use view::ResultView;

/// Shown when the service sent no translation.
pub const NO_TRANSLATION: &str = "No translation available";

pub fn emoji_for(sentiment: &str) -> &'static str {
    Sentiment::from_label(sentiment).emoji()
}

pub fn label_for(sentiment: &str) -> &'static str {
    Sentiment::from_label(sentiment).label()
}

pub fn tint_for(sentiment: &str) -> Tint {
    Sentiment::from_label(sentiment).tint()
}

/// Confidence as a whole percentage, truncated toward zero.
///
/// Values outside 0.0-1.0 pass through (1.5 gives 150); the float to int
/// cast saturates, and NaN gives 0.
pub fn confidence_percent(confidence: f64) -> i32 {
    (confidence * 100.0) as i32
}

pub fn agreement_line(agreement: &str) -> String {
    format!("{} ✓", agreement)
}

pub fn translation_or_default(translation: Option<&str>) -> &str {
    translation.unwrap_or(NO_TRANSLATION)
}
