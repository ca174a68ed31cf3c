//! Item deletion tool

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::types::id_string;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;

/// Request to delete an item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteItemRequest {
    /// Item to delete
    #[serde(deserialize_with = "id_string")]
    pub item_id: String,
}

/// Tool for deleting an item
#[derive(Default)]
pub struct DeleteItemTool;

impl DeleteItemTool {
    /// Creates a new instance of the DeleteItemTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteItemTool {
    fn name(&self) -> &'static str {
        "delete-item"
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
                    "description": "Monday.com Item ID to delete"
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
        let request: DeleteItemRequest = BaseToolImpl::parse_arguments(self.name(), arguments)?;
        tracing::info!("Deleting item {}", request.item_id);

        let outcome = context
            .client
            .delete_item(&request.item_id)
            .await
            .map(|_| format!("Deleted item {}.", request.item_id));
        BaseToolImpl::finish(format!("deleting item {}", request.item_id), outcome)
    }
}
