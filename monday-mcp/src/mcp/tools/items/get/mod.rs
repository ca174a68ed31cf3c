//! Item lookup by identifier

use crate::error::{MondayMcpError, Result};
use crate::mcp::shared_utils::McpFormatter;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::types::OneOrMany;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::Value;

/// Request to fetch one or more items
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetItemByIdRequest {
    /// Item identifier, or a list of them
    pub item_id: OneOrMany,
}

/// Tool for fetching items by id
#[derive(Default)]
pub struct GetItemByIdTool;

impl GetItemByIdTool {
    /// Creates a new instance of the GetItemByIdTool
    pub fn new() -> Self {
        Self
    }

    async fn fetch(item_ids: &[String], context: &ToolContext) -> Result<String> {
        let envelope = context.client.fetch_items_by_id(item_ids).await?;

        let found = envelope
            .pointer("/data/items")
            .and_then(Value::as_array)
            .is_some_and(|items| !items.is_empty());
        if !found {
            return Err(MondayMcpError::NotFound(format!(
                "No Monday.com items found for {}.",
                McpFormatter::format_name_list(item_ids)
            )));
        }

        Ok(format!(
            "Monday.com items: {}",
            McpFormatter::format_json(&envelope)
        ))
    }
}

#[async_trait]
impl McpTool for GetItemByIdTool {
    fn name(&self) -> &'static str {
        "get-item-by-id"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "itemId": {
                    "description": "Monday.com Item ID, or a list of Item IDs",
                    "oneOf": [
                        {"type": "string"},
                        {"type": "array", "items": {"type": "string"}}
                    ]
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
        let request: GetItemByIdRequest = BaseToolImpl::parse_arguments(self.name(), arguments)?;
        let item_ids = request.item_id.into_ids();
        BaseToolImpl::finish(
            "fetching Monday.com items",
            Self::fetch(&item_ids, context).await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monday::mock::MockMondayClient;
    use crate::test_utils::{arguments, expect_text, test_context};
    use serde_json::json;

    #[tokio::test]
    async fn test_single_and_multiple_ids() {
        let client = MockMondayClient::new().with_response(
            "fetch_items_by_id",
            json!({"data": {"items": [{"id": "1", "name": "A"}]}}),
        );
        let tool = GetItemByIdTool::new();

        let result = tool
            .execute(arguments(json!({"itemId": "1"})), &test_context(&client))
            .await
            .unwrap();
        assert!(expect_text(&result, false).starts_with("Monday.com items: "));

        tool.execute(arguments(json!({"itemId": ["1", 2]})), &test_context(&client))
            .await
            .unwrap();

        let calls = client.calls_to("fetch_items_by_id");
        assert_eq!(calls[0].arguments, json!({"item_ids": ["1"]}));
        assert_eq!(calls[1].arguments, json!({"item_ids": ["1", "2"]}));
    }

    #[tokio::test]
    async fn test_no_items_is_not_found() {
        let client = MockMondayClient::new()
            .with_response("fetch_items_by_id", json!({"data": {"items": []}}));

        let result = GetItemByIdTool::new()
            .execute(arguments(json!({"itemId": "404"})), &test_context(&client))
            .await
            .unwrap();

        assert_eq!(
            expect_text(&result, true),
            r#"No Monday.com items found for ["404"]."#
        );
    }
}
