//! Request and response bodies of the analysis service.

use serde::{Deserialize, Serialize};

use super::types::{AnalysisDetail, ConsistencyInfo, ResultModel};

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Success body of `POST /api/analyze`.
///
/// `sentiment`, `confidence` and `consistency_info` are mandatory;
/// `analysis` may be missing or null, in which case every detail is absent.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub sentiment: String,
    pub confidence: f64,
    #[serde(default)]
    pub analysis: Option<AnalysisDetail>,
    pub consistency_info: ConsistencyInfo,
}

impl AnalyzeResponse {
    /// Decode a response body and check the invariants serde cannot express.
    pub fn decode(body: &str) -> Result<ResultModel, String> {
        let response: AnalyzeResponse =
            serde_json::from_str(body).map_err(|e| e.to_string())?;
        response.into_model()
    }

    pub fn into_model(self) -> Result<ResultModel, String> {
        if self.consistency_info.num_calls == 0 {
            return Err("consistency_info.num_calls must be at least 1".to_string());
        }

        Ok(ResultModel {
            sentiment: self.sentiment,
            confidence: self.confidence,
            analysis: self.analysis.unwrap_or_default(),
            consistency_info: self.consistency_info,
        })
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub num_calls: Option<u32>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_text_field() {
        let json = serde_json::to_value(AnalyzeRequest::new("hola")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "hola" }));
    }

    #[test]
    fn test_decode_full_response() {
        let body = r#"{
            "sentiment": "negative",
            "confidence": 0.88,
            "analysis": {
                "analysis_focus": "English switch carries the emotion",
                "cultural_context": "Strong feelings surface through language switching",
                "key_expression": "Im depressed",
                "translation": "I got used to having you here"
            },
            "consistency_info": {
                "num_calls": 3,
                "agreement": "2/3",
                "all_results": [
                    {"sentiment": "negative", "confidence": 0.9},
                    {"sentiment": "negative", "confidence": 0.86},
                    {"sentiment": "neutral", "confidence": 0.6}
                ]
            }
        }"#;

        let model = AnalyzeResponse::decode(body).unwrap();
        assert_eq!(model.sentiment, "negative");
        assert_eq!(model.confidence, 0.88);
        assert_eq!(model.analysis.key_expression.as_deref(), Some("Im depressed"));
        assert_eq!(model.consistency_info.num_calls, 3);
        assert_eq!(model.consistency_info.agreement, "2/3");
        assert_eq!(model.consistency_info.all_results.len(), 3);
    }

    #[test]
    fn test_decode_null_analysis_fields() {
        let body = r#"{
            "sentiment": "neutral",
            "confidence": 0.5,
            "analysis": {"analysis_focus": null, "translation": null},
            "consistency_info": {"num_calls": 1, "agreement": "1/1"}
        }"#;

        let model = AnalyzeResponse::decode(body).unwrap();
        assert_eq!(model.analysis, AnalysisDetail::default());
        assert!(model.consistency_info.all_results.is_empty());
    }

    #[test]
    fn test_decode_missing_analysis() {
        let body = r#"{
            "sentiment": "positive",
            "confidence": 0.7,
            "consistency_info": {"num_calls": 3, "agreement": "3/3"}
        }"#;

        let model = AnalyzeResponse::decode(body).unwrap();
        assert!(model.analysis.translation.is_none());
    }

    #[test]
    fn test_decode_missing_confidence_fails() {
        let body = r#"{
            "sentiment": "positive",
            "consistency_info": {"num_calls": 3, "agreement": "3/3"}
        }"#;

        let err = AnalyzeResponse::decode(body).unwrap_err();
        assert!(err.contains("confidence"));
    }

    #[test]
    fn test_decode_missing_sentiment_fails() {
        let body = r#"{
            "confidence": 0.4,
            "consistency_info": {"num_calls": 3, "agreement": "3/3"}
        }"#;

        let err = AnalyzeResponse::decode(body).unwrap_err();
        assert!(err.contains("sentiment"));
    }

    #[test]
    fn test_decode_zero_calls_fails() {
        let body = r#"{
            "sentiment": "positive",
            "confidence": 0.4,
            "consistency_info": {"num_calls": 0, "agreement": "0/0"}
        }"#;

        let err = AnalyzeResponse::decode(body).unwrap_err();
        assert!(err.contains("num_calls"));
    }

    #[test]
    fn test_decode_not_json_fails() {
        assert!(AnalyzeResponse::decode("<html>Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_health_status() {
        let body = r#"{
            "status": "healthy",
            "service": "Clave Sentiment Analysis API",
            "model": "gemini-2.5-flash-exp",
            "num_calls": 3
        }"#;

        let health: HealthStatus = serde_json::from_str(body).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.num_calls, Some(3));
    }
}
