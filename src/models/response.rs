use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response returned to the Lambda caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    #[schemars(description = "JSON-encoded upstream payload")]
    pub body: String,
    #[schemars(description = "Upstream HTTP status code")]
    pub status_code: u16,
}

/// Raw result of the outbound call
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}
