//! HTTP client for an external classification endpoint.
//!
//! The endpoint is an optional collaborator: one POST per email, a short
//! timeout, no retries. Every response field is optional and untrusted;
//! the engine decides what, if anything, to apply.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::Email;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Classification returned by the external service. All fields optional:
/// a partial or empty object is a valid response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteAnalysis {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub recommended_action: Option<String>,
    #[serde(default)]
    pub agent_type: Option<String>,
}

/// Errors from the external classification call.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuildFailed(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Endpoint returned status {0}")]
    BadStatus(u16),
    #[error("Parse error: {0}")]
    ParseError(String),
}

#[derive(Serialize)]
struct WirePayload<'a> {
    email: WireEmail<'a>,
}

#[derive(Serialize)]
struct WireEmail<'a> {
    sender_email: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// Client for the external classification endpoint.
pub struct RemoteClassifier {
    http: reqwest::Client,
    endpoint: String,
}

impl RemoteClassifier {
    /// Build a client for the given endpoint URL with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RemoteError> {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Build a client with an explicit request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::ClientBuildFailed(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Classify one email remotely. A single attempt: any network error,
    /// non-2xx status, or malformed body is returned as an error for the
    /// caller to fall back on.
    pub async fn classify(&self, email: &Email) -> Result<RemoteAnalysis, RemoteError> {
        let payload = WirePayload {
            email: WireEmail {
                sender_email: &email.sender.email,
                subject: &email.subject,
                body: &email.body,
            },
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| RemoteError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::BadStatus(status.as_u16()));
        }

        response
            .json::<RemoteAnalysis>()
            .await
            .map_err(|e| RemoteError::ParseError(e.to_string()))
    }
}
