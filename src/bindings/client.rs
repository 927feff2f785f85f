use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::ClientConfig;

// ============================================================================
// Error Types
// ============================================================================

/// Body of a non-success backend response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{detail}")]
pub struct ApiError {
    pub detail: String,
    pub status: u16,
}

impl ApiError {
    /// Parse an error body, falling back to the HTTP status when the body
    /// carries no `status` of its own.
    ///
    /// Returns `None` when the body is not JSON or has no `detail`.
    pub fn from_body(http_status: u16, body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let detail = match value.get("detail")? {
            Value::Null => return None,
            Value::String(detail) => detail.clone(),
            // Request validation failures carry a list of `{ loc, msg, type }`
            Value::Array(items) => items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str).or_else(|| item.as_str()))
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        };
        let status = value
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
            .unwrap_or(http_status);

        Some(Self { detail, status })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Non-success response with a structured `{ detail, status }` body
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Non-success response whose body could not be read as an error payload
    #[error("Server returned HTTP {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response format: {0}")]
    Decode(String),

    #[error("Could not read file: {0}")]
    File(String),
}

impl ClientError {
    /// Message to show the user: the backend's `detail` when there is one,
    /// otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ClientError::Api(err) if !err.detail.trim().is_empty() => err.detail.clone(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status of the failed response, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api(err) => Some(err.status),
            ClientError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Handle to the question-answering backend.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.config.endpoint(path))
    }
}

/// Decode a success body as `T`, or turn a non-success response into a
/// [`ClientError`]
pub(crate) async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(match ApiError::from_body(status.as_u16(), &body) {
            Some(err) => ClientError::Api(err),
            None => ClientError::Status(status.as_u16()),
        });
    }

    serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
}
