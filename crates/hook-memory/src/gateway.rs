//! Remote memory gateway.
//!
//! The sole point of contact with the Ensue memory service. Every other
//! component is a pure function over data returned from here, so the
//! service surface is a trait the pipelines depend on; [`RemoteGateway`]
//! is its JSON-RPC 2.0 over HTTP POST implementation.

use crate::schema::{DiscoveryResult, FetchedMemory, MemoryKey};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use thiserror::Error;

/// Streaming transports deliver the JSON-RPC envelope as a quoted
/// `data: ...` frame; it must be unwrapped before use.
const STREAM_ENVELOPE_PREFIX: &str = "data: ";

/// Gateway call failure.
///
/// Every variant is recoverable: a failed call fails its pipeline step and
/// nothing else. There are no retries.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Operations the memory service exposes.
pub trait MemoryService {
    /// List stored keys, up to `limit`.
    fn list_keys(&self, limit: usize) -> Result<Vec<MemoryKey>, GatewayError>;

    /// Bulk-fetch values for the given keys.
    fn get_memory(&self, key_names: &[String]) -> Result<Vec<FetchedMemory>, GatewayError>;

    /// Free-text relevance query, up to `limit` results.
    fn discover_memories(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<DiscoveryResult>, GatewayError>;
}

/// Blocking JSON-RPC client for the Ensue API.
#[derive(Debug)]
pub struct RemoteGateway {
    client: reqwest::blocking::Client,
    api_url: String,
    api_key: String,
}

impl RemoteGateway {
    /// Build a gateway with a hard per-call timeout.
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Issue one `tools/call` request and unwrap the payload.
    fn call(&self, operation: &str, arguments: Value) -> Result<Value, GatewayError> {
        let payload = json!({
            "jsonrpc": "2.0",
            "method": "tools/call",
            "params": { "name": operation, "arguments": arguments },
            "id": 1,
        });

        let body = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()?
            .text()?;

        extract_payload(&body)
    }
}

impl MemoryService for RemoteGateway {
    fn list_keys(&self, limit: usize) -> Result<Vec<MemoryKey>, GatewayError> {
        let payload = self.call("list_keys", json!({ "limit": limit }))?;
        let parsed: ListKeysPayload = serde_json::from_value(payload)?;
        Ok(parsed.keys)
    }

    fn get_memory(&self, key_names: &[String]) -> Result<Vec<FetchedMemory>, GatewayError> {
        let payload = self.call("get_memory", json!({ "key_names": key_names }))?;
        let parsed: ResultsPayload<FetchedMemory> = serde_json::from_value(payload)?;
        Ok(parsed.results)
    }

    fn discover_memories(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<DiscoveryResult>, GatewayError> {
        let payload = self.call("discover_memories", json!({ "query": query, "limit": limit }))?;
        let parsed: ResultsPayload<DiscoveryResult> = serde_json::from_value(payload)?;
        Ok(parsed.results)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ListKeysPayload {
    #[serde(default)]
    keys: Vec<MemoryKey>,
}

#[derive(Debug, Deserialize)]
struct ResultsPayload<T> {
    #[serde(default)]
    results: Vec<T>,
}

/// Unwrap a response body down to the operation payload.
///
/// Framing, in order: parse the body as JSON; if that yields a string
/// carrying the stream envelope prefix, strip it and re-parse. The payload
/// is `result.structuredContent` if present, else `result.content[0].text`
/// parsed as JSON, else an empty object.
fn extract_payload(body: &str) -> Result<Value, GatewayError> {
    let mut envelope: Value = serde_json::from_str(body)?;

    if let Value::String(framed) = &envelope {
        if let Some(inner) = framed.strip_prefix(STREAM_ENVELOPE_PREFIX) {
            envelope = serde_json::from_str(inner)?;
        }
    }

    let Some(result) = envelope.get("result") else {
        return Ok(empty_object());
    };

    if let Some(structured) = result.get("structuredContent") {
        return Ok(structured.clone());
    }

    if let Some(text) = result
        .get("content")
        .and_then(|content| content.get(0))
        .and_then(|item| item.get("text"))
        .and_then(Value::as_str)
    {
        return Ok(serde_json::from_str(text)?);
    }

    Ok(empty_object())
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}
