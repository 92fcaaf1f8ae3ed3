//! HTTP implementation of [`AnalysisClient`].
//!
//! One `reqwest::Client` (and therefore one connection pool) is built at
//! construction and shared by every call and every clone of the client.

use std::error::Error as StdError;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use super::{AnalysisClient, AnalysisError};
use crate::config::{Config, TimeoutConfig};
use crate::model::{AnalyzeRequest, AnalyzeResponse, HealthStatus, ResultModel};

const ANALYZE_PATH: &str = "/api/analyze";
const HEALTH_PATH: &str = "/api/health";

/// Analysis service client over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    base_url: String,
}

impl HttpAnalysisClient {
    /// Create a client with its own transport, configured from `config`.
    pub fn new(config: &Config) -> Result<Self, AnalysisError> {
        let client = build_transport(&config.timeouts)?;
        Ok(Self::with_transport(client, &config.server.base_url))
    }

    /// Create a client on top of an existing transport.
    pub fn with_transport(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Build the shared transport.
///
/// reqwest has no write-phase timeout, so the overall request deadline is
/// the sum of the three phases; connect and read are enforced individually.
pub fn build_transport(timeouts: &TimeoutConfig) -> Result<Client, AnalysisError> {
    let client = Client::builder()
        .connect_timeout(timeouts.connect())
        .read_timeout(timeouts.read())
        .timeout(timeouts.connect() + timeouts.write() + timeouts.read())
        .build()?;
    Ok(client)
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, text: &str) -> Result<ResultModel, AnalysisError> {
        let url = self.url(ANALYZE_PATH);

        debug!("POST {} ({} chars)", url, text.chars().count());

        let response = self
            .client
            .post(&url)
            .json(&AnalyzeRequest::new(text))
            .send()
            .await?;

        let body = read_success_body(response).await?;

        let model = AnalyzeResponse::decode(&body).map_err(AnalysisError::Protocol)?;
        debug!(
            "Decoded analysis: sentiment={}, confidence={}, agreement={}",
            model.sentiment, model.confidence, model.consistency_info.agreement
        );

        Ok(model)
    }

    async fn health(&self) -> Result<HealthStatus, AnalysisError> {
        let url = self.url(HEALTH_PATH);

        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let body = read_success_body(response).await?;

        serde_json::from_str(&body).map_err(|e| {
            AnalysisError::Protocol(format!("Failed to parse health response: {}", e))
        })
    }
}

/// Return the body of a success response, or classify the failure.
async fn read_success_body(response: Response) -> Result<String, AnalysisError> {
    let status = response.status();
    debug!("Response status: {}", status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AnalysisError::Server {
            status: status.as_u16(),
            detail: error_detail(status, &body),
        });
    }

    Ok(response.text().await?)
}

/// Extract the `detail` field of an error body.
fn error_detail(status: StatusCode, body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Null => None,
        other => {
            debug!("Non-string error detail for {}: {}", status, other);
            Some(other.to_string())
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        let message = error_chain(&err);
        if err.is_timeout() {
            AnalysisError::Timeout(message)
        } else if err.is_decode() {
            AnalysisError::Protocol(message)
        } else {
            AnalysisError::Connection(message)
        }
    }
}

/// Join an error and its sources into one line.
///
/// reqwest's top-level message omits the cause ("error sending request"),
/// which is the part a user needs to see.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
