//! Error types for the proxy.
//!
//! Every failure an invocation can hit maps onto one of these variants, so the
//! Lambda caller can branch on the error type instead of inspecting the shape
//! of the returned payload.

use lambda_runtime::Diagnostic;
use std::fmt;

/// Custom error type for the proxy.
#[derive(Debug)]
pub enum ProxyError {
    /// The event could not be parsed or is missing a required field
    InvalidEvent(String),
    /// The API key could not be read from Parameter Store
    SecretLookup(String),
    /// The outbound call failed before a response arrived
    Http(String),
    /// The upstream answered with a non-success status
    UpstreamStatus { status: u16, body: String },
    /// The upstream payload could not be encoded into the response body
    Serialization(String),
}

impl ProxyError {
    /// Error type reported to the Lambda caller.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidEvent(_) => "InvalidInput",
            Self::SecretLookup(_) => "SecretLookupError",
            Self::Http(_) => "HttpError",
            Self::UpstreamStatus { .. } => "UpstreamStatusError",
            Self::Serialization(_) => "SerializationError",
        }
    }
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEvent(msg) => write!(f, "Invalid event: {msg}"),
            Self::SecretLookup(msg) => write!(f, "Secret lookup error: {msg}"),
            Self::Http(msg) => write!(f, "HTTP error: {msg}"),
            Self::UpstreamStatus { status, body } => {
                write!(f, "Upstream returned status {status}: {body}")
            }
            Self::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ProxyError {}

impl From<reqwest::Error> for ProxyError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string())
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<ProxyError> for Diagnostic {
    fn from(error: ProxyError) -> Self {
        Self {
            error_type: error.error_type().to_string(),
            error_message: error.to_string(),
        }
    }
}
