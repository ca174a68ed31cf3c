//! Board columns tool

use super::render_board_data;
use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::query;
use crate::monday::types::id_string;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;

/// Request to read a board's columns
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetBoardColumnsRequest {
    /// Board to read
    #[serde(deserialize_with = "id_string")]
    pub board_id: String,
}

/// Tool for listing the columns of a board
#[derive(Default)]
pub struct GetBoardColumnsTool;

impl GetBoardColumnsTool {
    /// Creates a new instance of the GetBoardColumnsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetBoardColumnsTool {
    fn name(&self) -> &'static str {
        "get-board-columns"
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
                    "description": "Monday.com Board ID whose Columns are listed"
                }
            },
            "required": ["boardId"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: GetBoardColumnsRequest =
            BaseToolImpl::parse_arguments(self.name(), arguments)?;

        let outcome = context
            .client
            .execute(&query::board_columns(&request.board_id))
            .await
            .and_then(|envelope| render_board_data("columns", &request.board_id, &envelope));
        BaseToolImpl::finish("fetching Monday.com board columns", outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monday::mock::MockMondayClient;
    use crate::test_utils::{arguments, expect_text, test_context};
    use serde_json::json;

    #[tokio::test]
    async fn test_lists_columns_with_types() {
        let client = MockMondayClient::new().with_response(
            "execute",
            json!({"data": {"boards": [{"columns": [
                {"id": "status", "title": "Status", "type": "status", "settings_str": "{}"}
            ]}]}}),
        );

        let result = GetBoardColumnsTool::new()
            .execute(arguments(json!({"boardId": "9"})), &test_context(&client))
            .await
            .unwrap();

        let text = expect_text(&result, false);
        assert!(text.starts_with("Got the columns of Monday.com board 9. "));
        assert!(text.contains(r#""type":"status""#));

        let sent = &client.calls_to("execute")[0].arguments;
        assert_eq!(sent["variables"], json!({"boardIds": ["9"]}));
        assert!(sent["query"].as_str().unwrap().contains("columns"));
    }
}
