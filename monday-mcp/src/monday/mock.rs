//! In-memory [`MondayApi`] implementation for testing
//!
//! `MockMondayClient` records every call with its arguments and answers with
//! canned envelopes configured per method. Failures can be injected per method to
//! exercise upstream error paths.
//!
//! # Usage
//!
//! ```ignore
//! use monday_mcp::monday::mock::MockMondayClient;
//! use serde_json::json;
//!
//! let client = MockMondayClient::new()
//!     .with_response("fetch_boards", json!({"data": {"boards": []}}));
//! ```

use super::query::GraphQlQuery;
use super::MondayApi;
use crate::error::{MondayMcpError, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A single call made against the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Trait method name, e.g. `create_item`
    pub method: &'static str,
    /// Arguments the method received
    pub arguments: Value,
}

#[derive(Debug, Default)]
struct MockState {
    calls: Vec<RecordedCall>,
    responses: HashMap<&'static str, Value>,
    failures: HashMap<&'static str, String>,
}

/// Mock Monday.com client with recorded calls
#[derive(Debug, Clone, Default)]
pub struct MockMondayClient {
    state: Arc<Mutex<MockState>>,
}

impl MockMondayClient {
    /// Create a mock that answers every call with `{"data": {}}`
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer calls to `method` with the given envelope
    pub fn with_response(self, method: &'static str, envelope: Value) -> Self {
        self.lock().responses.insert(method, envelope);
        self
    }

    /// Fail calls to `method` with an upstream error carrying `message`
    pub fn with_failure(self, method: &'static str, message: impl Into<String>) -> Self {
        self.lock().failures.insert(method, message.into());
        self
    }

    /// All calls made so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Calls made to a single method
    pub fn calls_to(&self, method: &str) -> Vec<RecordedCall> {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.method == method)
            .cloned()
            .collect()
    }

    /// Total number of calls made
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state
            .lock()
            .expect("mock client state mutex was poisoned")
    }

    fn record(&self, method: &'static str, arguments: Value) -> Result<Value> {
        let mut state = self.lock();
        state.calls.push(RecordedCall { method, arguments });

        if let Some(message) = state.failures.get(method) {
            return Err(MondayMcpError::Upstream(message.clone()));
        }

        Ok(state
            .responses
            .get(method)
            .cloned()
            .unwrap_or_else(|| json!({"data": {}})))
    }
}

#[async_trait]
impl MondayApi for MockMondayClient {
    async fn create_item(
        &self,
        board_id: &str,
        group_id: &str,
        item_name: &str,
        column_values: Option<&Value>,
    ) -> Result<Value> {
        self.record(
            "create_item",
            json!({
                "board_id": board_id,
                "group_id": group_id,
                "item_name": item_name,
                "column_values": column_values,
            }),
        )
    }

    async fn create_subitem(
        &self,
        parent_item_id: &str,
        item_name: &str,
        column_values: Option<&Value>,
    ) -> Result<Value> {
        self.record(
            "create_subitem",
            json!({
                "parent_item_id": parent_item_id,
                "item_name": item_name,
                "column_values": column_values,
            }),
        )
    }

    async fn change_multiple_column_values(
        &self,
        board_id: &str,
        item_id: &str,
        column_values: &Value,
    ) -> Result<Value> {
        self.record(
            "change_multiple_column_values",
            json!({
                "board_id": board_id,
                "item_id": item_id,
                "column_values": column_values,
            }),
        )
    }

    async fn create_update(&self, item_id: &str, body: &str) -> Result<Value> {
        self.record("create_update", json!({"item_id": item_id, "body": body}))
    }

    async fn fetch_items_by_id(&self, item_ids: &[String]) -> Result<Value> {
        self.record("fetch_items_by_id", json!({"item_ids": item_ids}))
    }

    async fn move_item_to_group(&self, item_id: &str, group_id: &str) -> Result<Value> {
        self.record(
            "move_item_to_group",
            json!({"item_id": item_id, "group_id": group_id}),
        )
    }

    async fn delete_item(&self, item_id: &str) -> Result<Value> {
        self.record("delete_item", json!({"item_id": item_id}))
    }

    async fn archive_item(&self, item_id: &str) -> Result<Value> {
        self.record("archive_item", json!({"item_id": item_id}))
    }

    async fn fetch_boards(&self, limit: u32) -> Result<Value> {
        self.record("fetch_boards", json!({"limit": limit}))
    }

    async fn get_groups_by_board(&self, board_id: &str) -> Result<Value> {
        self.record("get_groups_by_board", json!({"board_id": board_id}))
    }

    async fn execute(&self, query: &GraphQlQuery) -> Result<Value> {
        self.record("execute", serde_json::to_value(query)?)
    }
}
