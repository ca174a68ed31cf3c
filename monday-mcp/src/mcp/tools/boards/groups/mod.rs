//! Board groups tool

use super::render_board_data;
use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::types::id_string;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;

/// Request to read a board's groups
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetBoardGroupsRequest {
    /// Board to read
    #[serde(deserialize_with = "id_string")]
    pub board_id: String,
}

/// Tool for listing the groups of a board
#[derive(Default)]
pub struct GetBoardGroupsTool;

impl GetBoardGroupsTool {
    /// Creates a new instance of the GetBoardGroupsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetBoardGroupsTool {
    fn name(&self) -> &'static str {
        "get-board-groups"
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
                    "description": "Monday.com Board ID whose Groups are listed"
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
        let request: GetBoardGroupsRequest =
            BaseToolImpl::parse_arguments(self.name(), arguments)?;

        let outcome = context
            .client
            .get_groups_by_board(&request.board_id)
            .await
            .and_then(|envelope| render_board_data("groups", &request.board_id, &envelope));
        BaseToolImpl::finish("fetching Monday.com board groups", outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monday::mock::MockMondayClient;
    use crate::test_utils::{arguments, expect_text, test_context};
    use serde_json::json;

    #[tokio::test]
    async fn test_lists_groups() {
        let client = MockMondayClient::new().with_response(
            "get_groups_by_board",
            json!({"data": {"boards": [{"groups": [{"id": "topics", "title": "Topics"}]}]}}),
        );

        let result = GetBoardGroupsTool::new()
            .execute(arguments(json!({"boardId": "9"})), &test_context(&client))
            .await
            .unwrap();

        assert_eq!(
            expect_text(&result, false),
            r#"Got the groups of Monday.com board 9. {"boards":[{"groups":[{"id":"topics","title":"Topics"}]}]}"#
        );
        assert_eq!(
            client.calls()[0].arguments,
            json!({"board_id": "9"})
        );
    }

    #[tokio::test]
    async fn test_unknown_board_is_not_found() {
        let client = MockMondayClient::new()
            .with_response("get_groups_by_board", json!({"data": {"boards": []}}));

        let result = GetBoardGroupsTool::new()
            .execute(arguments(json!({"boardId": "9"})), &test_context(&client))
            .await
            .unwrap();

        assert_eq!(expect_text(&result, true), "Board 9 not found.");
    }
}
