use lambda_runtime::tracing::{debug, error, info};
use lambda_runtime::{Diagnostic, LambdaEvent};
use serde_json::Value;

use crate::dispatch::{OutboundRequest, build_headers, build_url, dispatch};
use crate::http::HttpClient;
use crate::models::{ProxyError, ProxyEvent, ProxyResponse};
use crate::secrets::{SecretResolver, resolve_region};

/// Runs one proxied call: resolve the API key, then send the request.
///
/// The secret lookup always completes before the outbound request is built.
/// A failed lookup short-circuits; no request is sent without a resolved key.
///
/// # Errors
///
/// Returns `ProxyError::InvalidEvent` for missing or malformed fields, or the
/// error raised by the secret lookup, the outbound call or response encoding.
pub async fn proxy_invocation<S, H>(
    event: ProxyEvent,
    resolver: &S,
    client: &H,
) -> Result<ProxyResponse, ProxyError>
where
    S: SecretResolver + ?Sized,
    H: HttpClient + ?Sized,
{
    let verb = event.verb();
    let endpoint = event.endpoint()?;
    let api_key_ref = event.api_key_ref()?;
    let url = build_url(event.is_ssl(), event.api_host.as_deref(), endpoint)?;
    let region = resolve_region(event.region.as_deref());

    let secret = resolver.resolve(api_key_ref, region).await?;
    let headers = build_headers(&event.headers.unwrap_or_default(), &secret)?;

    info!(verb = verb.as_str(), url = %url, "Dispatching request");

    let request = OutboundRequest::new(verb, url, headers, event.data);
    let response = dispatch(client, request).await?;

    info!(status = response.status_code, "Request completed");
    debug!(body = %response.body, "Response body");

    Ok(response)
}

/// Lambda event handler.
///
/// # Errors
///
/// Returns a `Diagnostic` error with one of the following types:
///
/// - `InvalidInput`: the event could not be parsed or lacks a required field
/// - `SecretLookupError`: the API key could not be read from Parameter Store
/// - `HttpError`: the outbound call failed before a response arrived
/// - `UpstreamStatusError`: the upstream returned a non-2xx status
/// - `SerializationError`: the upstream payload could not be encoded
pub async fn function_handler<S, H>(
    event: LambdaEvent<Value>,
    resolver: &S,
    client: &H,
) -> Result<ProxyResponse, Diagnostic>
where
    S: SecretResolver + ?Sized,
    H: HttpClient + ?Sized,
{
    let (payload, context) = event.into_parts();
    debug!(request_id = %context.request_id, "Received invocation");

    let proxy_event: ProxyEvent = serde_json::from_value(payload).map_err(|e| {
        error!(error = %e, "Failed to parse event");
        ProxyError::InvalidEvent(format!("Failed to parse event: {e}"))
    })?;

    proxy_invocation(proxy_event, resolver, client)
        .await
        .map_err(|e| {
            error!(error_type = e.error_type(), error = %e, "Invocation failed");
            Diagnostic::from(e)
        })
}
