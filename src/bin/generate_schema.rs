//! Schema generator for the proxy's invocation contract.
//!
//! Writes `event_schema.json` with the JSON Schemas of the event the Lambda
//! accepts and the response it returns.

use anyhow::{Context, Result};
use std::fs;

const OUTPUT_FILE: &str = "event_schema.json";

fn main() -> Result<()> {
    let schemas =
        ssm_api_proxy::schema::event_schemas().context("Failed to build event schemas")?;
    let json = serde_json::to_string_pretty(&schemas).context("Failed to serialize schema")?;

    fs::write(OUTPUT_FILE, json).with_context(|| format!("Failed to write {OUTPUT_FILE}"))?;
    println!("✅ Generated {OUTPUT_FILE}");

    Ok(())
}
