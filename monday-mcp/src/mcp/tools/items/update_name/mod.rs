//! Status update of an item located by name
//!
//! Two round-trips: the group's items are fetched (one page of
//! [`NAME_LOOKUP_PAGE_SIZE`]), the first item whose name matches exactly is
//! picked, and its `status` column is set to the requested label. Duplicate names
//! resolve to the first one in the order the service returned them.

use crate::error::{MondayMcpError, Result};
use crate::mcp::shared_utils::McpFormatter;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::query::{self, NAME_LOOKUP_PAGE_SIZE};
use crate::monday::types::{id_string, ItemSummary};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::Value;

/// Request to set the status of an item found by name
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateItemNameRequest {
    /// Board the item is on
    #[serde(deserialize_with = "id_string")]
    pub board_id: String,
    /// Group the item is in
    pub group_id: String,
    /// Exact display name of the item
    pub item_name: String,
    /// Status label to set
    pub status_value: String,
}

/// Tool for updating an item's status by name
#[derive(Default)]
pub struct UpdateItemNameTool;

impl UpdateItemNameTool {
    /// Creates a new instance of the UpdateItemNameTool
    pub fn new() -> Self {
        Self
    }

    async fn update(request: &UpdateItemNameRequest, context: &ToolContext) -> Result<String> {
        let lookup = query::items_in_group(
            &request.board_id,
            &request.group_id,
            NAME_LOOKUP_PAGE_SIZE,
        );
        let envelope = context.client.execute(&lookup).await?;

        let boards = envelope
            .pointer("/data/boards")
            .and_then(Value::as_array)
            .filter(|boards| !boards.is_empty())
            .ok_or_else(|| {
                MondayMcpError::NotFound(format!(
                    "Board {} not found or no data returned.",
                    request.board_id
                ))
            })?;

        let items: Vec<ItemSummary> = match boards[0].pointer("/items_page/items") {
            None | Some(Value::Null) => Vec::new(),
            Some(items) => serde_json::from_value(items.clone()).map_err(|e| {
                MondayMcpError::malformed(format!("unexpected item list shape: {e}"))
            })?,
        };
        if items.is_empty() {
            return Err(MondayMcpError::NotFound(format!(
                "No items found in board {}, group {}.",
                request.board_id, request.group_id
            )));
        }

        let Some(target) = items.iter().find(|item| item.name == request.item_name) else {
            let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
            return Err(MondayMcpError::NotFound(format!(
                "Item with name '{}' not found in group {}. Available items: {}",
                request.item_name,
                request.group_id,
                McpFormatter::format_name_list(&names)
            )));
        };
        let item_id = target.id.to_string();
        tracing::debug!("Resolved '{}' to item {}", request.item_name, item_id);

        let column_values = serde_json::json!({"status": {"label": request.status_value}});
        let response = context
            .client
            .change_multiple_column_values(&request.board_id, &item_id, &column_values)
            .await?;

        Ok(format!(
            "Successfully updated item '{}' (ID: {}) status to '{}'. Response: {}",
            request.item_name,
            item_id,
            request.status_value,
            McpFormatter::format_json(&response)
        ))
    }
}

#[async_trait]
impl McpTool for UpdateItemNameTool {
    fn name(&self) -> &'static str {
        "update-item-name"
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
                    "description": "Monday.com Board ID containing the Item"
                },
                "groupId": {
                    "type": "string",
                    "description": "Monday.com Group ID containing the Item"
                },
                "itemName": {
                    "type": "string",
                    "description": "Exact name of the Item to update, e.g. 'McpTest'"
                },
                "statusValue": {
                    "type": "string",
                    "description": "Status label to set, e.g. 'Done' or 'Working on it'"
                }
            },
            "required": ["boardId", "groupId", "itemName", "statusValue"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: UpdateItemNameRequest =
            BaseToolImpl::parse_arguments(self.name(), arguments)?;
        let outcome = Self::update(&request, context).await;
        BaseToolImpl::finish(format!("updating item '{}'", request.item_name), outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monday::mock::MockMondayClient;
    use crate::test_utils::{arguments, expect_text, test_context};
    use serde_json::json;

    fn group_with(names: &[(&str, &str)]) -> Value {
        let items: Vec<Value> = names
            .iter()
            .map(|(id, name)| json!({"id": id, "name": name, "column_values": []}))
            .collect();
        json!({"data": {"boards": [{"items_page": {"items": items}}]}})
    }

    fn request(item_name: &str) -> serde_json::Map<String, Value> {
        arguments(json!({
            "boardId": "100",
            "groupId": "topics",
            "itemName": item_name,
            "statusValue": "Done"
        }))
    }

    fn duplicate_group() -> MockMondayClient {
        MockMondayClient::new().with_response(
            "execute",
            group_with(&[("1", "Alpha"), ("2", "McpTest"), ("3", "Beta"), ("4", "McpTest")]),
        )
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let client = duplicate_group();

        let result = UpdateItemNameTool::new()
            .execute(request("McpTest"), &test_context(&client))
            .await
            .unwrap();

        let text = expect_text(&result, false);
        assert!(text.starts_with("Successfully updated item 'McpTest' (ID: 2) status to 'Done'."));

        let updates = client.calls_to("change_multiple_column_values");
        assert_eq!(updates.len(), 1);
        assert_eq!(
            updates[0].arguments,
            json!({
                "board_id": "100",
                "item_id": "2",
                "column_values": {"status": {"label": "Done"}}
            })
        );
    }

    #[tokio::test]
    async fn test_lookup_uses_group_filter_and_page_size() {
        let client = duplicate_group();

        UpdateItemNameTool::new()
            .execute(request("Alpha"), &test_context(&client))
            .await
            .unwrap();

        let lookup = &client.calls_to("execute")[0].arguments["variables"];
        assert_eq!(lookup["limit"], json!(NAME_LOOKUP_PAGE_SIZE));
        assert_eq!(
            lookup["queryParams"]["rules"][0]["compare_value"],
            json!(["topics"])
        );
    }

    #[tokio::test]
    async fn test_no_match_lists_available_names() {
        let client = duplicate_group();

        let result = UpdateItemNameTool::new()
            .execute(request("Gamma"), &test_context(&client))
            .await
            .unwrap();

        assert_eq!(
            expect_text(&result, true),
            r#"Item with name 'Gamma' not found in group topics. Available items: ["Alpha", "McpTest", "Beta", "McpTest"]"#
        );
        assert!(client.calls_to("change_multiple_column_values").is_empty());
    }

    #[tokio::test]
    async fn test_match_is_case_sensitive() {
        let client = duplicate_group();

        let result = UpdateItemNameTool::new()
            .execute(request("mcptest"), &test_context(&client))
            .await
            .unwrap();

        assert!(expect_text(&result, true).contains("not found in group topics"));
    }

    #[tokio::test]
    async fn test_empty_group_and_missing_board() {
        let client = MockMondayClient::new().with_response("execute", group_with(&[]));
        let result = UpdateItemNameTool::new()
            .execute(request("Alpha"), &test_context(&client))
            .await
            .unwrap();
        assert_eq!(
            expect_text(&result, true),
            "No items found in board 100, group topics."
        );

        let client =
            MockMondayClient::new().with_response("execute", json!({"data": {"boards": []}}));
        let result = UpdateItemNameTool::new()
            .execute(request("Alpha"), &test_context(&client))
            .await
            .unwrap();
        assert_eq!(
            expect_text(&result, true),
            "Board 100 not found or no data returned."
        );
    }

    #[tokio::test]
    async fn test_failure_in_second_step_is_caught() {
        let client = duplicate_group().with_failure("change_multiple_column_values", "Invalid label");

        let result = UpdateItemNameTool::new()
            .execute(request("Beta"), &test_context(&client))
            .await
            .unwrap();

        assert_eq!(
            expect_text(&result, true),
            "Error updating item 'Beta': Monday.com API error: Invalid label"
        );
    }

    #[tokio::test]
    async fn test_blank_status_and_name_reach_the_handler() {
        let client = MockMondayClient::new().with_response(
            "execute",
            group_with(&[("7", "Alpha"), ("8", " ")]),
        );

        let result = crate::test_utils::call_tool(
            &client,
            "update-item-name",
            arguments(json!({
                "boardId": "100",
                "groupId": "topics",
                "itemName": " ",
                "statusValue": ""
            })),
        )
        .await
        .unwrap();

        assert!(expect_text(&result, false).starts_with("Successfully updated item ' ' (ID: 8)"));
        let updates = client.calls_to("change_multiple_column_values");
        assert_eq!(updates.len(), 1);
        assert_eq!(
            updates[0].arguments["column_values"],
            json!({"status": {"label": ""}})
        );
    }
}
