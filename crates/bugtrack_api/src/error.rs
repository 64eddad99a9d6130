//! Error model shared by all remote service clients.

use std::io;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Represents the error conditions a remote round trip can produce: HTTP
/// errors carrying the remote status and body, authentication failures,
/// timeouts, network issues, serialization problems and other unexpected
/// errors.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("http {status}: {message}")]
    Http {
        status: StatusCode,
        message: String,
    },
    #[error("authentication error: {0}")]
    Authentication(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl TrackerError {
    /// Constructs an HTTP error from a status and the raw response body,
    /// preferring the JSON `message` field both trackers use for errors.
    pub fn http(status: StatusCode, body: &str) -> Self {
        TrackerError::Http {
            status,
            message: extract_message(body).unwrap_or_else(|| body.to_string()),
        }
    }

    /// Remote status attached to this error, when one exists.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TrackerError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TrackerError {
    /// Converts reqwest errors into semantic TrackerError variants.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TrackerError::Timeout(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            TrackerError::Http {
                status,
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TrackerError::Network(err.to_string())
        } else {
            TrackerError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TrackerError {
    /// Converts serde_json decode/encode failures into serialization errors.
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Serialization(err.to_string())
    }
}

fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
}
