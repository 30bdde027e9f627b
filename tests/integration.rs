// Integration tests for the full request flow
// These run the real reqwest client against a local mockito upstream
#![allow(clippy::unwrap_used, clippy::panic)]

use async_trait::async_trait;
use mockito::{Matcher, Server};
use reqwest::Client;
use serde_json::{Value, json};
use ssm_api_proxy::handler::proxy_invocation;
use ssm_api_proxy::http::ReqwestClient;
use ssm_api_proxy::models::{ProxyError, ProxyEvent};
use ssm_api_proxy::secrets::SecretResolver;

/// Secret store that always hands back the same key
struct StaticSecret(&'static str);

#[async_trait]
impl SecretResolver for StaticSecret {
    async fn resolve(&self, _name: &str, _region: &str) -> Result<String, ProxyError> {
        Ok(self.0.to_string())
    }
}

fn event_for(host: &str, verb: &str, data: Option<Value>) -> ProxyEvent {
    let mut payload = json!({
        "API_HOST": host,
        "API_KEY_REF": "my-key",
        "ENDPOINT": "/v1/things",
        "HEADERS": {"headers": {"Accept": "application/json"}},
        "HTTP_VERB": verb,
        "IS_SSL": false
    });
    if let Some(data) = data {
        payload["DATA"] = data;
    }
    serde_json::from_value(payload).unwrap()
}

fn client() -> ReqwestClient {
    ReqwestClient::new(Client::new())
}

#[tokio::test]
async fn test_get_forwards_headers_and_maps_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/things")
        .match_header("authorization", "secret123")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true}"#)
        .create_async()
        .await;

    let event = event_for(&server.host_with_port(), "GET", None);
    let response = proxy_invocation(event, &StaticSecret("secret123"), &client())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "{\"ok\":true}");
}

#[tokio::test]
async fn test_post_forwards_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/things")
        .match_header("authorization", "secret123")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"x": 1})))
        .with_status(201)
        .with_body(r#"{"id": 42}"#)
        .create_async()
        .await;

    let event = event_for(&server.host_with_port(), "POST", Some(json!({"x": 1})));
    let response = proxy_invocation(event, &StaticSecret("secret123"), &client())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status_code, 201);
    assert_eq!(response.body, "{\"id\":42}");
}

#[tokio::test]
async fn test_post_forwards_data_verbatim() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/things")
        .match_body(Matcher::Exact(r#"{"zeta":1,"alpha":{"y":2,"b":3}}"#.to_string()))
        .with_status(200)
        .with_body(r#"{"zeta": 1, "alpha": 2}"#)
        .create_async()
        .await;

    let data: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": {"y": 2, "b": 3}}"#).unwrap();
    let event = event_for(&server.host_with_port(), "POST", Some(data));
    let response = proxy_invocation(event, &StaticSecret("secret"), &client())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.body, r#"{"zeta":1,"alpha":2}"#);
}

#[tokio::test]
async fn test_post_string_data_sent_raw() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/things")
        .match_body(Matcher::Exact("a=1&b=2".to_string()))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let event = event_for(&server.host_with_port(), "POST", Some(json!("a=1&b=2")));
    proxy_invocation(event, &StaticSecret("secret"), &client())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_without_data_sends_empty_object() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/things")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let event = event_for(&server.host_with_port(), "POST", None);
    let response = proxy_invocation(event, &StaticSecret("secret"), &client())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.body, "{}");
}

#[tokio::test]
async fn test_delete_never_sends_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/things")
        .match_header("authorization", "secret")
        .match_body(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body(r#"{"deleted": true}"#)
        .create_async()
        .await;

    let event = event_for(&server.host_with_port(), "DELETE", Some(json!({"x": 1})));
    let response = proxy_invocation(event, &StaticSecret("secret"), &client())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.body, "{\"deleted\":true}");
}

#[tokio::test]
async fn test_plain_text_body_is_json_encoded() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/things")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("hello")
        .create_async()
        .await;

    let event = event_for(&server.host_with_port(), "GET", None);
    let response = proxy_invocation(event, &StaticSecret("secret"), &client())
        .await
        .unwrap();

    assert_eq!(response.body, "\"hello\"");
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/things")
        .with_status(404)
        .with_body("missing")
        .create_async()
        .await;

    let event = event_for(&server.host_with_port(), "GET", None);
    let err = proxy_invocation(event, &StaticSecret("secret"), &client())
        .await
        .unwrap_err();

    mock.assert_async().await;
    match err {
        ProxyError::UpstreamStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "missing");
        }
        other => panic!("Expected UpstreamStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_caller_authorization_is_replaced() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/things")
        .match_header("authorization", "secret123")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let mut event = event_for(&server.host_with_port(), "GET", None);
    if let Some(config) = event.headers.as_mut() {
        config
            .headers
            .insert("Authorization".to_string(), json!("Bearer stale"));
    }

    proxy_invocation(event, &StaticSecret("secret123"), &client())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_upstream_is_http_error() {
    // Port 1 is reserved and nothing listens there
    let event = event_for("127.0.0.1:1", "GET", None);
    let err = proxy_invocation(event, &StaticSecret("secret"), &client())
        .await
        .unwrap_err();

    assert_eq!(err.error_type(), "HttpError");
}
