//! Transfer object handed from the submission side to the result display.

use serde::{Deserialize, Serialize};

use super::types::ResultModel;

/// A completed analysis flattened together with the text that was analyzed.
///
/// Passed by value across the navigation boundary; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPayload {
    pub input_text: String,
    pub sentiment: String,
    pub confidence: f64,
    pub analysis_focus: Option<String>,
    pub cultural_context: Option<String>,
    pub key_expression: Option<String>,
    pub translation: Option<String>,
    pub agreement: String,
}

impl ResultPayload {
    pub fn new(input_text: impl Into<String>, model: ResultModel) -> Self {
        let ResultModel {
            sentiment,
            confidence,
            analysis,
            consistency_info,
        } = model;

        Self {
            input_text: input_text.into(),
            sentiment,
            confidence,
            analysis_focus: analysis.analysis_focus,
            cultural_context: analysis.cultural_context,
            key_expression: analysis.key_expression,
            translation: analysis.translation,
            agreement: consistency_info.agreement,
        }
    }
}
