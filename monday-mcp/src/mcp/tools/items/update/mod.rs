//! Bulk column update tool

use crate::error::Result;
use crate::mcp::shared_utils::McpFormatter;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::types::id_string;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Request to change several column values of an item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateItemRequest {
    /// Board the item is on
    #[serde(deserialize_with = "id_string")]
    pub board_id: String,
    /// Item to update
    #[serde(deserialize_with = "id_string")]
    pub item_id: String,
    /// New values keyed by column id
    pub column_values: Map<String, Value>,
}

/// Tool for updating an item's column values
#[derive(Default)]
pub struct UpdateItemTool;

impl UpdateItemTool {
    /// Creates a new instance of the UpdateItemTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UpdateItemTool {
    fn name(&self) -> &'static str {
        "update-item"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "boardId": {
                    "type": "string",
                    "description": "Monday.com Board ID that the Item is on"
                },
                "itemId": {
                    "type": "string",
                    "description": "Monday.com Item ID to update"
                },
                "columnValues": {
                    "type": "object",
                    "description": "New column values keyed by column ID, e.g. {\"text\": \"Hello\", \"status\": {\"label\": \"Done\"}}",
                    "additionalProperties": true
                }
            },
            "required": ["boardId", "itemId", "columnValues"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: UpdateItemRequest = BaseToolImpl::parse_arguments(self.name(), arguments)?;
        tracing::debug!(
            "Updating {} column(s) of item {}",
            request.column_values.len(),
            request.item_id
        );

        let column_values = Value::Object(request.column_values);
        let outcome = context
            .client
            .change_multiple_column_values(&request.board_id, &request.item_id, &column_values)
            .await
            .map(|envelope| {
                format!(
                    "Updated Monday.com item {}. {}",
                    request.item_id,
                    McpFormatter::format_json(&envelope)
                )
            });

        BaseToolImpl::finish("updating Monday.com item", outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MondayMcpError;
    use crate::monday::mock::MockMondayClient;
    use crate::test_utils::{arguments, expect_text, test_context};
    use serde_json::json;

    #[tokio::test]
    async fn test_sends_all_column_values_in_one_call() {
        let client = MockMondayClient::new().with_response(
            "change_multiple_column_values",
            json!({"data": {"change_multiple_column_values": {"id": "5"}}}),
        );

        let result = UpdateItemTool::new()
            .execute(
                arguments(json!({
                    "boardId": "1",
                    "itemId": "5",
                    "columnValues": {"text": "Hi", "status": {"label": "Done"}}
                })),
                &test_context(&client),
            )
            .await
            .unwrap();

        assert_eq!(
            expect_text(&result, false),
            r#"Updated Monday.com item 5. {"data":{"change_multiple_column_values":{"id":"5"}}}"#
        );
        assert_eq!(client.call_count(), 1);
        assert_eq!(
            client.calls()[0].arguments["column_values"],
            json!({"text": "Hi", "status": {"label": "Done"}})
        );
    }

    #[tokio::test]
    async fn test_column_values_must_be_an_object() {
        let client = MockMondayClient::new();
        let err = UpdateItemTool::new()
            .execute(
                arguments(json!({"boardId": "1", "itemId": "5", "columnValues": "Done"})),
                &test_context(&client),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, MondayMcpError::InvalidArguments { ref tool, .. } if tool == "update-item"));
        assert_eq!(client.call_count(), 0);
    }
}
