//! Move an item to another group

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::types::{id_at, id_string};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;

/// Request to move an item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MoveItemToGroupRequest {
    /// Item to move
    #[serde(deserialize_with = "id_string")]
    pub item_id: String,
    /// Destination group
    pub group_id: String,
}

/// Tool for moving an item between groups
#[derive(Default)]
pub struct MoveItemToGroupTool;

impl MoveItemToGroupTool {
    /// Creates a new instance of the MoveItemToGroupTool
    pub fn new() -> Self {
        Self
    }

    async fn move_item(request: &MoveItemToGroupRequest, context: &ToolContext) -> Result<String> {
        let envelope = context
            .client
            .move_item_to_group(&request.item_id, &request.group_id)
            .await?;
        let moved_id = id_at(&envelope, "/data/move_item_to_group/id")?;
        Ok(format!(
            "Moved item {} to group {}. ID of the moved item: {}",
            request.item_id, request.group_id, moved_id
        ))
    }
}

#[async_trait]
impl McpTool for MoveItemToGroupTool {
    fn name(&self) -> &'static str {
        "move-item-to-group"
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
                    "description": "Monday.com Item ID to move"
                },
                "groupId": {
                    "type": "string",
                    "description": "Monday.com Group ID to move the Item to"
                }
            },
            "required": ["itemId", "groupId"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: MoveItemToGroupRequest =
            BaseToolImpl::parse_arguments(self.name(), arguments)?;
        let outcome = Self::move_item(&request, context).await;
        BaseToolImpl::finish(
            format!("moving item {} to group {}", request.item_id, request.group_id),
            outcome,
        )
    }
}
