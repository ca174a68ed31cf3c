//! Test utilities for monday-mcp tests
//!
//! Shared set-up for tool tests: a fixed configuration, a tool context backed by
//! [`MockMondayClient`], and helpers for building argument maps and reading
//! result text.
//!
//! ```no_run
//! use monday_mcp::monday::mock::MockMondayClient;
//! use monday_mcp::test_utils::{arguments, call_tool};
//! use serde_json::json;
//!
//! # async fn example() {
//! let client = MockMondayClient::new();
//! let result = call_tool(&client, "delete-item", arguments(json!({"itemId": "1"})))
//!     .await
//!     .unwrap();
//! # }
//! ```

use crate::config::MondayConfig;
use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, ToolContext, ToolRegistry};
use crate::monday::mock::MockMondayClient;
use rmcp::model::CallToolResult;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Workspace base used by [`test_config`]
pub const TEST_WORKSPACE_URL: &str = "https://acme.monday.com";

/// Configuration pointing at a fictional workspace
pub fn test_config() -> MondayConfig {
    MondayConfig::new("test-api-key", TEST_WORKSPACE_URL)
}

/// Tool context whose client is a clone of `client`, so calls stay observable
pub fn test_context(client: &MockMondayClient) -> ToolContext {
    ToolContext::new(Arc::new(client.clone()), Arc::new(test_config()))
}

/// Turn a JSON object literal into an argument map
pub fn arguments(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("tool arguments must be a JSON object, got {other}"),
    }
}

/// Dispatch a call through the global catalog against the mock
pub async fn call_tool(
    client: &MockMondayClient,
    name: &str,
    arguments: Map<String, Value>,
) -> Result<CallToolResult> {
    ToolRegistry::catalog()
        .call_tool(name, arguments, &test_context(client))
        .await
}

/// Text of a result, asserting whether it is error-tagged
pub fn expect_text(result: &CallToolResult, is_error: bool) -> String {
    assert_eq!(
        result.is_error,
        Some(is_error),
        "unexpected result tag: {}",
        BaseToolImpl::result_text(result)
    );
    BaseToolImpl::result_text(result)
}
