//! API Errors
//!
//! Every failed request ends up as one flash message; this module decides
//! which text that is.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by API calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("Server responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// The response body was not the expected JSON.
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("Invalid request body: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Error body shape used by the service: `{"message": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Build a status error, keeping the server's `message` when the body
    /// carries one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message);
        ApiError::Status { status, message }
    }

    /// Text for the flash region.
    pub fn flash_text(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
