//! JSON Schemas describing the invocation contract.
//!
//! Used by the `generate-schema` binary so callers can validate the events
//! they send and the responses they get back.

use schemars::{JsonSchema, schema_for};
use serde_json::{Value, json};

use crate::models::{ProxyEvent, ProxyResponse};

/// Builds `{ "event": <schema>, "response": <schema> }`.
///
/// # Errors
///
/// Returns an error if a schema cannot be converted to JSON.
pub fn event_schemas() -> Result<Value, serde_json::Error> {
    Ok(json!({
        "event": schema_of::<ProxyEvent>()?,
        "response": schema_of::<ProxyResponse>()?,
    }))
}

fn schema_of<T: JsonSchema>() -> Result<Value, serde_json::Error> {
    let mut schema = serde_json::to_value(schema_for!(T))?;

    // Titles repeat the Rust type name and mean nothing to callers
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("title");
    }

    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_schema_properties() {
        let schemas = event_schemas().unwrap();
        let properties = schemas["event"]["properties"].as_object().unwrap();

        for field in [
            "API_HOST",
            "API_KEY_REF",
            "DATA",
            "ENDPOINT",
            "HEADERS",
            "HTTP_VERB",
            "IS_SSL",
            "REGION",
        ] {
            assert!(properties.contains_key(field), "Missing event field: {field}");
        }
        assert!(schemas["event"].get("title").is_none());
    }

    #[test]
    fn test_response_schema_properties() {
        let schemas = event_schemas().unwrap();
        let response = &schemas["response"];

        assert_eq!(response["type"], "object");
        let required = response["required"].as_array().unwrap();
        assert!(required.contains(&json!("body")));
        assert!(required.contains(&json!("statusCode")));
    }
}
