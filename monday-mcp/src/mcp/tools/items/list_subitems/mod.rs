//! Sub-item listing tool

use crate::error::Result;
use crate::mcp::shared_utils::McpFormatter;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::query;
use crate::monday::types::id_strings;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;

/// Request to list the sub-items of some items
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListSubitemsInItemsRequest {
    /// Parent items
    #[serde(deserialize_with = "id_strings")]
    pub item_ids: Vec<String>,
}

/// Tool for listing sub-items of items
#[derive(Default)]
pub struct ListSubitemsInItemsTool;

impl ListSubitemsInItemsTool {
    /// Creates a new instance of the ListSubitemsInItemsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListSubitemsInItemsTool {
    fn name(&self) -> &'static str {
        "list-subitems-in-items"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "itemIds": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Monday.com Item IDs whose Sub-items are listed"
                }
            },
            "required": ["itemIds"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: ListSubitemsInItemsRequest =
            BaseToolImpl::parse_arguments(self.name(), arguments)?;

        let outcome = context
            .client
            .execute(&query::subitems_of_items(&request.item_ids))
            .await
            .map(|envelope| {
                format!(
                    "Sub-items of Monday.com items {}: {}",
                    McpFormatter::format_name_list(&request.item_ids),
                    McpFormatter::format_json(&envelope)
                )
            });

        BaseToolImpl::finish("listing Monday.com sub-items", outcome)
    }
}
