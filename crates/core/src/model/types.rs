//! Decoded analysis result types.

use serde::{Deserialize, Serialize};

/// A completed analysis.
///
/// Constructed once per successful round trip and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultModel {
    /// Sentiment label as sent by the server ("positive", "negative",
    /// "neutral", or anything else). Interpreted case-insensitively.
    pub sentiment: String,
    /// Model certainty, nominally 0.0-1.0. Not range-checked.
    pub confidence: f64,
    pub analysis: AnalysisDetail,
    pub consistency_info: ConsistencyInfo,
}

/// Free-text analysis detail. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetail {
    /// What the analysis focused on.
    #[serde(default)]
    pub analysis_focus: Option<String>,
    /// Cultural background for the interpretation.
    #[serde(default)]
    pub cultural_context: Option<String>,
    /// Key expression extracted from the input.
    #[serde(default)]
    pub key_expression: Option<String>,
    /// Translation of the input.
    #[serde(default)]
    pub translation: Option<String>,
}

/// How many times the server queried its model and how well the calls agreed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyInfo {
    /// Number of internal model calls (at least 1).
    pub num_calls: u32,
    /// Agreement descriptor, e.g. "3/3" or "1/3 (used highest confidence)".
    pub agreement: String,
    /// Per-call outcomes, when the server reports them.
    #[serde(default)]
    pub all_results: Vec<CallOutcome>,
}

/// Outcome of a single internal model call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallOutcome {
    pub sentiment: String,
    pub confidence: f64,
}
