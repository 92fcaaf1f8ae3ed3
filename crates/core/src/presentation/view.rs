use serde::Serialize;

use super::{
    agreement_line, confidence_percent, translation_or_default, Sentiment, Tint,
};
use crate::model::ResultPayload;

/// Every display attribute of the result screen, derived from a payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub input_text: String,
    pub sentiment: Sentiment,
    pub emoji: &'static str,
    pub label: &'static str,
    /// "<emoji> <label>"
    pub headline: String,
    pub tint: Tint,
    pub confidence_percent: i32,
    pub agreement_line: String,
    pub key_expression: Option<String>,
    pub analysis_focus: Option<String>,
    pub cultural_context: Option<String>,
    pub translation: String,
}

impl ResultView {
    pub fn from_payload(payload: &ResultPayload) -> Self {
        let sentiment = Sentiment::from_label(&payload.sentiment);

        Self {
            input_text: payload.input_text.clone(),
            sentiment,
            emoji: sentiment.emoji(),
            label: sentiment.label(),
            headline: format!("{} {}", sentiment.emoji(), sentiment.label()),
            tint: sentiment.tint(),
            confidence_percent: confidence_percent(payload.confidence),
            agreement_line: agreement_line(&payload.agreement),
            key_expression: payload.key_expression.clone(),
            analysis_focus: payload.analysis_focus.clone(),
            cultural_context: payload.cultural_context.clone(),
            translation: translation_or_default(payload.translation.as_deref()).to_string(),
        }
    }

    /// Confidence text, e.g. "87%".
    pub fn confidence_text(&self) -> String {
        format!("{}%", self.confidence_percent)
    }

    /// Value for a 0-100 progress gauge; unlike the text, this is clamped.
    pub fn confidence_gauge(&self) -> u8 {
        self.confidence_percent.clamp(0, 100) as u8
    }
}
