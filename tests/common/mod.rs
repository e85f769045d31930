#![allow(dead_code)]


use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject};
use serde_json::Value;
use tmdb_mcp::mcp::{tmdb_registry, TmdbServer};
use tmdb_mcp::provider::MovieProvider;

pub use stub::{ProviderCall, StubFailure, StubProvider};

/// Build a server around `stub`, returning a handle for inspecting calls.
pub fn create_test_server(stub: StubProvider) -> (TmdbServer, Arc<StubProvider>) {
    let stub = Arc::new(stub);
    let provider: Arc<dyn MovieProvider> = stub.clone();
    let registry = tmdb_registry().expect("registry builds");
    (TmdbServer::new(provider, Arc::new(registry)), stub)
}

/// Convert a `json!({...})` literal into tool arguments.
pub fn args(value: Value) -> Option<JsonObject> {
    match value {
        Value::Object(map) => Some(map),
        Value::Null => None,
        other => panic!("tool arguments must be an object, got {other}"),
    }
}

/// Structured payload of a successful tool result.
pub fn structured(result: &CallToolResult) -> &Value {
    assert_ne!(result.is_error, Some(true), "unexpected tool error: {result:?}");
    result
        .structured_content
        .as_ref()
        .expect("successful results carry structured content")
}

/// Parsed error payload of a failed tool result.
pub fn tool_error(result: &CallToolResult) -> Value {
    assert_eq!(result.is_error, Some(true), "expected a tool error: {result:?}");
    let text = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .expect("tool errors carry a text block");
    serde_json::from_str(&text).expect("tool error text is JSON")
}
