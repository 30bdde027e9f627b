use async_trait::async_trait;
use lambda_runtime::tracing::{debug, error};
use reqwest::Client;
use serde_json::Value;
use std::sync::LazyLock;

use crate::dispatch::OutboundRequest;
use crate::models::{ProxyError, UpstreamResponse};

/// Trait for HTTP client operations to enable testing with mocks.
///
/// This trait abstracts the single outbound call so the handler can be
/// exercised without a real network.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send the request and return the upstream status and body.
    ///
    /// # Errors
    ///
    /// Returns `ProxyError::Http` if the request cannot be completed and
    /// `ProxyError::UpstreamStatus` if the upstream answers with a non-2xx status.
    async fn send(&self, request: OutboundRequest) -> Result<UpstreamResponse, ProxyError>;
}

/// Production HTTP client implementation using reqwest.
///
/// Library defaults apply: no retries and no timeout override.
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: OutboundRequest) -> Result<UpstreamResponse, ProxyError> {
        let OutboundRequest {
            verb,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(verb.into(), url).headers(headers);
        // Strings go out raw; every other payload is sent as JSON
        builder = match body {
            Some(Value::String(text)) => builder.body(text),
            Some(body) => builder.json(&body),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            error!(error = %e, "Outbound request failed");
            ProxyError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(error = %e, status = status.as_u16(), "Failed to read upstream body");
            ProxyError::from(e)
        })?;

        debug!(status = status.as_u16(), body_len = text.len(), "Received upstream response");

        if !status.is_success() {
            error!(status = status.as_u16(), "Upstream returned non-success status");
            return Err(ProxyError::UpstreamStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(UpstreamResponse {
            status: status.as_u16(),
            body: text,
        })
    }
}

/// Global HTTP client for production use
pub static HTTP_CLIENT: LazyLock<ReqwestClient> = LazyLock::new(|| ReqwestClient::new(Client::new()));
