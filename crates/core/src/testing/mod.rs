//! Testing utilities and mock implementations.
//!
//! Lets the submission flow be exercised end to end without a running
//! analysis service or a real screen.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use clave_core::testing::{fixtures, MockAnalysisClient, RecordingSurface};
//! use clave_core::SubmissionController;
//!
//! let client = Arc::new(MockAnalysisClient::new());
//! client.push_result(Ok(fixtures::result_model("positive", 0.92, "3/3"))).await;
//!
//! let surface = Arc::new(RecordingSurface::new());
//! let controller = SubmissionController::new(client.clone(), surface.clone());
//! controller.submit("I am so happy today").await;
//!
//! assert_eq!(surface.navigations().len(), 1);
//! ```

mod mock_client;
mod recording_surface;

pub use mock_client::MockAnalysisClient;
pub use recording_surface::{RecordingSurface, SurfaceEvent};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::model::{AnalysisDetail, CallOutcome, ConsistencyInfo, ResultModel};

    /// A result with every analysis field populated.
    pub fn result_model(sentiment: &str, confidence: f64, agreement: &str) -> ResultModel {
        ResultModel {
            sentiment: sentiment.to_string(),
            confidence,
            analysis: AnalysisDetail {
                analysis_focus: Some(format!("Focus for a {} reading", sentiment)),
                cultural_context: Some("Code-switching marks the emotional peak".to_string()),
                key_expression: Some("so happy".to_string()),
                translation: Some("Estoy muy feliz hoy".to_string()),
            },
            consistency_info: ConsistencyInfo {
                num_calls: 3,
                agreement: agreement.to_string(),
                all_results: (0..3)
                    .map(|_| CallOutcome {
                        sentiment: sentiment.to_string(),
                        confidence,
                    })
                    .collect(),
            },
        }
    }

    /// A result whose analysis detail is entirely absent.
    pub fn bare_result_model(sentiment: &str, confidence: f64) -> ResultModel {
        ResultModel {
            analysis: AnalysisDetail::default(),
            ..result_model(sentiment, confidence, "1/1")
        }
    }

    /// A response body as the analysis service sends it.
    pub fn response_json(sentiment: &str, confidence: f64, agreement: &str) -> serde_json::Value {
        serde_json::json!({
            "sentiment": sentiment,
            "confidence": confidence,
            "analysis": {
                "analysis_focus": "The English switch carries the feeling",
                "cultural_context": "Hashtags act as emotion markers",
                "key_expression": "#happy",
                "translation": "Estoy muy feliz hoy"
            },
            "consistency_info": {
                "num_calls": 3,
                "agreement": agreement,
                "all_results": [
                    {"sentiment": sentiment, "confidence": confidence},
                    {"sentiment": sentiment, "confidence": confidence},
                    {"sentiment": sentiment, "confidence": confidence}
                ]
            }
        })
    }
}
