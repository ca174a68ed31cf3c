//! Item updates retrieval tool
//!
//! Renders each update as a block of labelled lines, newest first as the service
//! returns them, with attached files listed under the body.

use crate::error::{MondayMcpError, Result};
use crate::mcp::shared_utils::McpFormatter;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::query;
use crate::monday::types::{id_string, ItemUpdate};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::Value;

/// Number of updates fetched when the caller does not pick a limit
pub const DEFAULT_LIMIT: u32 = 25;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// Request to read the updates on an item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetItemUpdatesRequest {
    /// Item to read
    #[serde(deserialize_with = "id_string")]
    pub item_id: String,
    /// Maximum number of updates to fetch
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Tool for reading the updates on an item
#[derive(Default)]
pub struct GetItemUpdatesTool;

impl GetItemUpdatesTool {
    /// Creates a new instance of the GetItemUpdatesTool
    pub fn new() -> Self {
        Self
    }

    async fn fetch(request: &GetItemUpdatesRequest, context: &ToolContext) -> Result<String> {
        let envelope = context
            .client
            .execute(&query::item_updates(&request.item_id, request.limit))
            .await?;

        let updates: Vec<ItemUpdate> = match envelope.pointer("/data/items/0/updates") {
            None | Some(Value::Null) => Vec::new(),
            Some(updates) => serde_json::from_value(updates.clone()).map_err(|e| {
                MondayMcpError::malformed(format!("unexpected update shape: {e}"))
            })?,
        };
        if updates.is_empty() {
            return Err(MondayMcpError::NotFound(format!(
                "No updates found for item {}.",
                request.item_id
            )));
        }

        let blocks: Vec<String> = updates.iter().map(McpFormatter::format_update).collect();
        Ok(format!(
            "Updates for item {}:\n\n{}",
            request.item_id,
            blocks.join("\n\n")
        ))
    }
}

#[async_trait]
impl McpTool for GetItemUpdatesTool {
    fn name(&self) -> &'static str {
        "get-item-updates"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "itemId": {
                    "type": "string",
                    "description": "Monday.com Item ID whose updates are fetched"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum number of updates to fetch (default 25)"
                }
            },
            "required": ["itemId"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: GetItemUpdatesRequest =
            BaseToolImpl::parse_arguments(self.name(), arguments)?;
        let outcome = Self::fetch(&request, context).await;
        BaseToolImpl::finish("fetching Monday.com item updates", outcome)
    }
}
