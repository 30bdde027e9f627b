use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::error::ProxyError;

/// HTTP verbs the proxy forwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    #[default]
    Get,
    Post,
    Delete,
}

impl HttpVerb {
    /// Only POST forwards a request body
    #[must_use]
    pub const fn carries_body(self) -> bool {
        matches!(self, Self::Post)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl From<HttpVerb> for reqwest::Method {
    fn from(verb: HttpVerb) -> Self {
        match verb {
            HttpVerb::Get => Self::GET,
            HttpVerb::Post => Self::POST,
            HttpVerb::Delete => Self::DELETE,
        }
    }
}

/// Request configuration forwarded with the outbound call.
///
/// Only the `headers` map is honoured; other keys are accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RequestConfig {
    #[serde(default)]
    #[schemars(description = "Headers sent with the outbound request")]
    pub headers: Map<String, Value>,
}

/// Invocation event received by the proxy
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ProxyEvent {
    #[schemars(description = "Target host, optionally with a port (defaults to localhost)")]
    pub api_host: Option<String>,
    #[schemars(description = "Name of the SSM parameter holding the API key")]
    pub api_key_ref: Option<String>,
    #[schemars(description = "Request body, forwarded on POST only (defaults to {})")]
    pub data: Option<Value>,
    #[schemars(description = "Path appended to the host, e.g. /v1/things")]
    pub endpoint: Option<String>,
    #[schemars(description = "Request configuration holding the headers to forward")]
    pub headers: Option<RequestConfig>,
    #[schemars(description = "GET, POST or DELETE (defaults to GET)")]
    pub http_verb: Option<HttpVerb>,
    #[schemars(description = "Use https instead of http")]
    pub is_ssl: Option<bool>,
    #[schemars(description = "Region of the parameter store (defaults to eu-west-2)")]
    pub region: Option<String>,
}

impl ProxyEvent {
    /// Returns the endpoint, failing when it is missing or empty.
    ///
    /// # Errors
    ///
    /// Returns `ProxyError::InvalidEvent` if `ENDPOINT` is absent or empty.
    pub fn endpoint(&self) -> Result<&str, ProxyError> {
        required(self.endpoint.as_deref(), "ENDPOINT")
    }

    /// Returns the parameter name of the API key, failing when it is missing or empty.
    ///
    /// # Errors
    ///
    /// Returns `ProxyError::InvalidEvent` if `API_KEY_REF` is absent or empty.
    pub fn api_key_ref(&self) -> Result<&str, ProxyError> {
        required(self.api_key_ref.as_deref(), "API_KEY_REF")
    }

    #[must_use]
    pub fn verb(&self) -> HttpVerb {
        self.http_verb.unwrap_or_default()
    }

    #[must_use]
    pub fn is_ssl(&self) -> bool {
        self.is_ssl.unwrap_or(false)
    }
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ProxyError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ProxyError::InvalidEvent(format!("{field} is required")))
}
