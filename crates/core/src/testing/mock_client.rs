//! Mock analysis client for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use super::fixtures;
use crate::client::{AnalysisClient, AnalysisError};
use crate::model::{HealthStatus, ResultModel};

/// Mock implementation of the AnalysisClient trait.
///
/// Provides controllable behavior for testing:
/// - Return scripted results in order
/// - Delay every call to hold a submission in flight
/// - Record submitted texts for assertions
///
/// With no scripted results left, `analyze` succeeds with a neutral result.
#[derive(Debug)]
pub struct MockAnalysisClient {
    /// Results returned by successive `analyze` calls.
    results: Arc<RwLock<VecDeque<Result<ResultModel, AnalysisError>>>>,
    /// Texts passed to `analyze`, in call order.
    calls: Arc<RwLock<Vec<String>>>,
    /// Time each `analyze` call takes.
    delay: Arc<RwLock<Option<Duration>>>,
    /// Result of `health`.
    health: Arc<RwLock<Result<HealthStatus, AnalysisError>>>,
}

impl Default for MockAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAnalysisClient {
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(VecDeque::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            delay: Arc::new(RwLock::new(None)),
            health: Arc::new(RwLock::new(Ok(HealthStatus {
                status: "healthy".to_string(),
                service: Some("mock".to_string()),
                model: None,
                num_calls: Some(3),
            }))),
        }
    }

    /// Queue the result of the next unanswered `analyze` call.
    pub async fn push_result(&self, result: Result<ResultModel, AnalysisError>) {
        self.results.write().await.push_back(result);
    }

    /// Make every `analyze` call take `delay`.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub async fn set_health(&self, health: Result<HealthStatus, AnalysisError>) {
        *self.health.write().await = health;
    }

    /// Texts submitted so far.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl AnalysisClient for MockAnalysisClient {
    async fn analyze(&self, text: &str) -> Result<ResultModel, AnalysisError> {
        self.calls.write().await.push(text.to_string());

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.results
            .write()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(fixtures::result_model("neutral", 0.5, "1/1")))
    }

    async fn health(&self) -> Result<HealthStatus, AnalysisError> {
        self.health.read().await.clone()
    }
}
