//! Item archival tool

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::types::id_string;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;

/// Request to archive an item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArchiveItemRequest {
    /// Item to archive
    #[serde(deserialize_with = "id_string")]
    pub item_id: String,
}

/// Tool for archiving an item
#[derive(Default)]
pub struct ArchiveItemTool;

impl ArchiveItemTool {
    /// Creates a new instance of the ArchiveItemTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ArchiveItemTool {
    fn name(&self) -> &'static str {
        "archive-item"
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
                    "description": "Monday.com Item ID to archive"
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
        let request: ArchiveItemRequest = BaseToolImpl::parse_arguments(self.name(), arguments)?;

        let outcome = context
            .client
            .archive_item(&request.item_id)
            .await
            .map(|_| format!("Archived item {}.", request.item_id));
        BaseToolImpl::finish(format!("archiving item {}", request.item_id), outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monday::mock::MockMondayClient;
    use crate::test_utils::{arguments, expect_text, test_context};
    use serde_json::json;

    #[tokio::test]
    async fn test_archives_item() {
        let client = MockMondayClient::new();

        let result = ArchiveItemTool::new()
            .execute(arguments(json!({"itemId": "77"})), &test_context(&client))
            .await
            .unwrap();

        assert_eq!(expect_text(&result, false), "Archived item 77.");
        assert_eq!(client.calls_to("archive_item").len(), 1);
        assert!(client.calls_to("delete_item").is_empty());
    }
}
