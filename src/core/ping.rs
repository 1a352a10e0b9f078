//! Ping probe types shared by the demo page and its HTTP client
//!
//! The probe hits a fixed endpoint and expects `{ "message": .., "count": .. }`.
//! Every failure (transport, status, body, timeout) ends up as a `PingError`
//! that the page renders inline.

use serde::{Deserialize, Serialize};

/// Endpoint queried by the ping action
pub const PING_ENDPOINT: &str = "/api/v1/ping";

/// Upper bound for a single ping round-trip
pub const PING_TIMEOUT_MS: u32 = 10_000;

/// Body returned by the ping endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
    pub count: serde_json::Number,
}

impl PingResponse {
    /// Decode an HTTP response into a ping payload
    ///
    /// Non-2xx statuses are rejected before the body is looked at.
    pub fn from_http(status: u16, body: &str) -> Result<Self, PingError> {
        if !(200..300).contains(&status) {
            return Err(PingError::Status(status));
        }
        serde_json::from_str(body).map_err(|e| PingError::Malformed(e.to_string()))
    }

    /// Text shown to the user on success
    pub fn display_text(&self) -> String {
        format!("{} {}", self.message, self.count)
    }
}

/// Ping request failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PingError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("no response within {0} ms")]
    Timeout(u32),
}

impl PingError {
    /// Single user-facing message for every failure kind
    pub fn user_message(&self) -> String {
        format!("Ping failed: {}", self)
    }
}

/// Render state of the ping action
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PingStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(PingResponse),
    Failed(PingError),
}

impl PingStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, PingStatus::Pending)
    }

    /// Success text, if the last ping succeeded
    pub fn success_text(&self) -> Option<String> {
        match self {
            PingStatus::Succeeded(response) => Some(response.display_text()),
            _ => None,
        }
    }

    /// Error text, if the last ping failed
    pub fn error_text(&self) -> Option<String> {
        match self {
            PingStatus::Failed(err) => Some(err.user_message()),
            _ => None,
        }
    }
}

impl From<Result<PingResponse, PingError>> for PingStatus {
    fn from(result: Result<PingResponse, PingError>) -> Self {
        match result {
            Ok(response) => PingStatus::Succeeded(response),
            Err(err) => PingStatus::Failed(err),
        }
    }
}
