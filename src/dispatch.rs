//! Outbound request construction and response mapping.

use reqwest::Url;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};

use crate::http::HttpClient;
use crate::models::{HttpVerb, ProxyError, ProxyResponse, RequestConfig, UpstreamResponse};

/// Host used when the event does not name one
pub const DEFAULT_API_HOST: &str = "localhost";

/// A fully prepared outbound call
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub verb: HttpVerb,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl OutboundRequest {
    /// Prepares the call for `verb`.
    ///
    /// GET and DELETE never carry a body. POST forwards `data`, or an empty
    /// JSON object when there is none.
    #[must_use]
    pub fn new(verb: HttpVerb, url: Url, headers: HeaderMap, data: Option<Value>) -> Self {
        let body = verb.carries_body().then(|| match data {
            Some(Value::Null) | None => Value::Object(Map::new()),
            Some(value) => value,
        });

        Self {
            verb,
            url,
            headers,
            body,
        }
    }
}

/// Builds `http(s)://<host><endpoint>`.
///
/// # Errors
///
/// Returns `ProxyError::InvalidEvent` if the result is not a valid URL.
pub fn build_url(is_ssl: bool, host: Option<&str>, endpoint: &str) -> Result<Url, ProxyError> {
    let scheme = if is_ssl { "https" } else { "http" };
    let host = host.filter(|h| !h.is_empty()).unwrap_or(DEFAULT_API_HOST);
    let raw = format!("{scheme}://{host}{endpoint}");

    Url::parse(&raw).map_err(|e| ProxyError::InvalidEvent(format!("invalid URL '{raw}': {e}")))
}

/// Converts the configured headers and injects the secret as `Authorization`.
///
/// Any caller-supplied authorization header is replaced.
///
/// # Errors
///
/// Returns `ProxyError::InvalidEvent` for header names or values that cannot be
/// sent, and `ProxyError::SecretLookup` if the stored secret is not a valid
/// header value.
pub fn build_headers(config: &RequestConfig, secret: &str) -> Result<HeaderMap, ProxyError> {
    let mut headers = HeaderMap::with_capacity(config.headers.len() + 1);

    for (name, value) in &config.headers {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Bool(_) | Value::Number(_) => value.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(ProxyError::InvalidEvent(format!(
                    "header '{name}' must be a string, number or boolean"
                )));
            }
        };

        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ProxyError::InvalidEvent(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(&text)
            .map_err(|e| ProxyError::InvalidEvent(format!("invalid value for header '{name}': {e}")))?;
        headers.insert(name, value);
    }

    let mut authorization = HeaderValue::from_str(secret).map_err(|_| {
        ProxyError::SecretLookup("secret is not a valid Authorization header value".to_string())
    })?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);

    Ok(headers)
}

/// Shapes a successful upstream response into the Lambda result.
///
/// JSON payloads are re-encoded; anything else is encoded as a JSON string.
///
/// # Errors
///
/// Returns `ProxyError::Serialization` if the payload cannot be encoded.
pub fn into_proxy_response(upstream: UpstreamResponse) -> Result<ProxyResponse, ProxyError> {
    let payload = serde_json::from_str::<Value>(&upstream.body)
        .unwrap_or_else(|_| Value::String(upstream.body));

    Ok(ProxyResponse {
        body: serde_json::to_string(&payload)?,
        status_code: upstream.status,
    })
}

/// Performs the single outbound call and maps its result.
///
/// # Errors
///
/// Propagates any `ProxyError` from the client or from response encoding.
pub async fn dispatch<H>(client: &H, request: OutboundRequest) -> Result<ProxyResponse, ProxyError>
where
    H: HttpClient + ?Sized,
{
    let upstream = client.send(request).await?;
    into_proxy_response(upstream)
}
