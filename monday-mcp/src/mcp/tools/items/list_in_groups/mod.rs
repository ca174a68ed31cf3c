//! Paginated item listing filtered by group

use crate::error::Result;
use crate::mcp::shared_utils::McpFormatter;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::query;
use crate::monday::types::id_string;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;

/// Page size used when the caller does not pick one
pub const DEFAULT_LIMIT: u32 = 100;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// Request to list the items of some groups of a board
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListItemsInGroupsRequest {
    /// Board to list
    #[serde(deserialize_with = "id_string")]
    pub board_id: String,
    /// Groups whose items are wanted
    pub group_ids: Vec<String>,
    /// Maximum number of items per page
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Cursor from a previous page
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Tool for listing items in groups
#[derive(Default)]
pub struct ListItemsInGroupsTool;

impl ListItemsInGroupsTool {
    /// Creates a new instance of the ListItemsInGroupsTool
    pub fn new() -> Self {
        Self
    }

    async fn list(request: &ListItemsInGroupsRequest, context: &ToolContext) -> Result<String> {
        let cursor = request.cursor.as_deref().filter(|c| !c.trim().is_empty());
        let query =
            query::items_in_groups(&request.board_id, &request.group_ids, request.limit, cursor);
        let envelope = context.client.execute(&query).await?;

        Ok(format!(
            "Items in groups {} of Monday.com board {}: {}",
            McpFormatter::format_name_list(&request.group_ids),
            request.board_id,
            McpFormatter::format_json(&envelope)
        ))
    }
}

#[async_trait]
impl McpTool for ListItemsInGroupsTool {
    fn name(&self) -> &'static str {
        "list-items-in-groups"
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
                    "description": "Monday.com Board ID that the Items are on"
                },
                "groupIds": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Group IDs whose Items are listed"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum number of Items per page (default 100)"
                },
                "cursor": {
                    "type": "string",
                    "description": "Cursor returned by a previous page; the group filter is carried by the cursor"
                }
            },
            "required": ["boardId", "groupIds"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: ListItemsInGroupsRequest =
            BaseToolImpl::parse_arguments(self.name(), arguments)?;
        tracing::debug!(
            "Listing items of board {} in groups {:?}",
            request.board_id,
            request.group_ids
        );
        let outcome = Self::list(&request, context).await;
        BaseToolImpl::finish("listing Monday.com items", outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monday::mock::MockMondayClient;
    use crate::test_utils::{arguments, expect_text, test_context};
    use serde_json::json;

    #[tokio::test]
    async fn test_first_page_filters_by_groups() {
        let client = MockMondayClient::new().with_response(
            "execute",
            json!({"data": {"boards": [{"items_page": {"cursor": "c1", "items": []}}]}}),
        );

        let result = ListItemsInGroupsTool::new()
            .execute(
                arguments(json!({"boardId": "10", "groupIds": ["topics", "done"]})),
                &test_context(&client),
            )
            .await
            .unwrap();

        let text = expect_text(&result, false);
        assert!(text.starts_with(r#"Items in groups ["topics", "done"] of Monday.com board 10: "#));
        assert!(text.contains(r#""cursor":"c1""#));

        let sent = &client.calls_to("execute")[0].arguments;
        assert_eq!(sent["variables"]["limit"], json!(DEFAULT_LIMIT));
        assert_eq!(
            sent["variables"]["queryParams"]["rules"][0]["compare_value"],
            json!(["topics", "done"])
        );
        assert!(sent["variables"].get("cursor").is_none());
    }

    #[tokio::test]
    async fn test_cursor_page_sends_only_cursor_and_limit() {
        let client = MockMondayClient::new();

        ListItemsInGroupsTool::new()
            .execute(
                arguments(json!({
                    "boardId": "10",
                    "groupIds": ["topics"],
                    "limit": 5,
                    "cursor": "MSw5NzI4MDA5MDAsaV9YcmxJb0p1VEdYc1VWeGlxeF9kLDg4MiwzNXw0MTQ1NzU1MTE5"
                })),
                &test_context(&client),
            )
            .await
            .unwrap();

        let sent = &client.calls_to("execute")[0].arguments;
        assert_eq!(
            sent["variables"],
            json!({
                "boardIds": ["10"],
                "cursor": "MSw5NzI4MDA5MDAsaV9YcmxJb0p1VEdYc1VWeGlxeF9kLDg4MiwzNXw0MTQ1NzU1MTE5",
                "limit": 5
            })
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_is_tagged() {
        let client = MockMondayClient::new().with_failure("execute", "Rate limit exceeded");

        let result = ListItemsInGroupsTool::new()
            .execute(
                arguments(json!({"boardId": "10", "groupIds": ["topics"]})),
                &test_context(&client),
            )
            .await
            .unwrap();

        assert!(expect_text(&result, true).starts_with("Error listing Monday.com items"));
    }
}
