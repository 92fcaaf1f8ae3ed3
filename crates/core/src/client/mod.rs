//! Analysis service client.
//!
//! [`AnalysisClient`] is the seam between submission orchestration and the
//! network. [`HttpAnalysisClient`] is the production implementation;
//! `crate::testing::MockAnalysisClient` stands in for it in tests.
//!
//! A client performs no input validation and never retries: each call
//! issues exactly one request.

mod http;

pub use http::{build_transport, HttpAnalysisClient};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{HealthStatus, ResultModel};

/// Coarse classification of a failed analysis attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Input rejected locally; never reaches the network.
    Validation,
    /// Timeout, refused connection, DNS failure.
    Network,
    /// Non-success HTTP status.
    Server,
    /// Response body did not decode into the expected shape.
    Protocol,
}

/// Errors returned by an [`AnalysisClient`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    /// A connect, read or write timeout elapsed.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Transport failure other than a timeout.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The service answered with a non-success status.
    #[error("Server error: {status}")]
    Server {
        status: u16,
        /// `detail` field of the error body, when the service sent one.
        detail: Option<String>,
    },

    /// Failed to parse response.
    #[error("Failed to decode response: {0}")]
    Protocol(String),
}

impl AnalysisError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AnalysisError::Timeout(_) | AnalysisError::Connection(_) => FailureKind::Network,
            AnalysisError::Server { .. } => FailureKind::Server,
            AnalysisError::Protocol(_) => FailureKind::Protocol,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, AnalysisError::Timeout(_))
    }
}

/// Trait for analysis service clients.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Submit `text` for analysis. Issues exactly one request.
    async fn analyze(&self, text: &str) -> Result<ResultModel, AnalysisError>;

    /// Query the service health endpoint.
    async fn health(&self) -> Result<HealthStatus, AnalysisError>;
}
