//! Client error type
//!
//! Turns transport failures and non-2xx responses into a single enum whose
//! `user_message()` is what the alert shows.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when making API requests.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network error, timeout, etc.).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned an error response (4xx or 5xx).
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message taken from the response body, or a status fallback.
        message: String,
    },

    /// The response body did not match the expected schema.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The configured base URL cannot carry request paths.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Result alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Build an `Api` error from a status code and the raw error body.
    pub fn from_response_body(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .and_then(message_text)
            .unwrap_or_else(|| format!("Server returned status {}", status));

        Self::Api { status, message }
    }

    /// Whether this is a "not found" (404) error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Parse(_) | Self::InvalidUrl(_) => None,
        }
    }

    /// Get the user-facing error message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(e) => {
                if e.is_timeout() {
                    "Request timed out. Please try again.".to_string()
                } else if e.is_connect() {
                    "Unable to connect to the server. Please check your connection.".to_string()
                } else {
                    "An unexpected network error occurred.".to_string()
                }
            }
            Self::Api { message, .. } => message.clone(),
            Self::Parse(_) => "Received an unexpected response from the server.".to_string(),
            Self::InvalidUrl(_) => "The API address is not a valid URL.".to_string(),
        }
    }
}

/// Error body shape. `message` is a string, or a list of strings for
/// validation failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<Value>,
}

fn message_text(value: Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s,
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };

    (!text.trim().is_empty()).then_some(text)
}

// ============================================================================
// Tests
// ============================================================================
