//! Client errors
//!
//! Failures are reported upward immediately: no retries, no backoff, and no
//! process-exit behavior lives in this layer.

use domain::Vector;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while talking to the backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// Failed to connect to the backend
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the backend failed in transit
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Request was cancelled by its deadline
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Error string reported by the backend in a bad-request body
    #[error("{0}")]
    Backend(String),

    /// Backend answered with an unexpected HTTP status
    #[error("backend returned {0}")]
    Status(String),

    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

/// An embedding failure, carrying the vectors already produced.
///
/// Chunks are embedded strictly in order, so `completed` holds the vectors
/// for a prefix of the input documents. Callers must not assume
/// all-or-nothing semantics when this error is returned.
#[derive(Debug, Error)]
#[error("embedding stopped after {} vectors: {source}", completed.len())]
pub struct EmbedError {
    /// Vectors for the documents embedded before the failure
    pub completed: Vec<Vector>,
    /// The underlying failure
    #[source]
    pub source: ClientError,
}

/// Shape of the backend's bad-request body
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    error: String,
}

/// Map an HTTP status and response body to the canonical error taxonomy.
///
/// 200 is success. 400 carries a structured `{"error": string}` body whose
/// message is surfaced verbatim; if that body fails to parse, the parse
/// failure is surfaced instead. Every other status becomes a generic error
/// carrying the HTTP status line. This classification applies to embedding
/// and generation calls alike.
pub(crate) fn classify_status(status: StatusCode, body: &[u8]) -> Result<(), ClientError> {
    if status == StatusCode::OK {
        return Ok(());
    }
    if status == StatusCode::BAD_REQUEST {
        return match serde_json::from_slice::<BackendErrorBody>(body) {
            Ok(body) => Err(ClientError::Backend(body.error)),
            Err(e) => Err(ClientError::InvalidResponse(e.to_string())),
        };
    }
    Err(ClientError::Status(status.to_string()))
}
