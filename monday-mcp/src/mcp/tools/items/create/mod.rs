//! Item creation tool for MCP operations
//!
//! Creates an item in a group, or a sub-item under a parent item. Exactly one of
//! `groupId` and `parentItemId` selects which; any other combination is refused
//! before the service is contacted.

use crate::error::{MondayMcpError, Result};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::types::{id_at, id_string, optional_id_string};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Request to create an item or sub-item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateItemRequest {
    /// Board the item belongs to
    #[serde(deserialize_with = "id_string")]
    pub board_id: String,
    /// Name of the new item
    pub item_title: String,
    /// Group to create the item in
    #[serde(default)]
    pub group_id: Option<String>,
    /// Parent item, when creating a sub-item
    #[serde(default, deserialize_with = "optional_id_string")]
    pub parent_item_id: Option<String>,
    /// Initial column values keyed by column id
    #[serde(default)]
    pub column_values: Option<Map<String, Value>>,
}

/// Tool for creating items and sub-items
#[derive(Default)]
pub struct CreateItemTool;

impl CreateItemTool {
    /// Creates a new instance of the CreateItemTool
    pub fn new() -> Self {
        Self
    }

    async fn create(request: CreateItemRequest, context: &ToolContext) -> Result<String> {
        let group_id = request.group_id.filter(|g| !g.trim().is_empty());
        let column_values = request.column_values.map(Value::Object);

        let (kind, board_id, item_id) = match (group_id, request.parent_item_id) {
            (Some(group_id), None) => {
                let envelope = context
                    .client
                    .create_item(
                        &request.board_id,
                        &group_id,
                        &request.item_title,
                        column_values.as_ref(),
                    )
                    .await?;
                let item_id = id_at(&envelope, "/data/create_item/id")?;
                ("item", request.board_id, item_id)
            }
            (None, Some(parent_item_id)) => {
                let envelope = context
                    .client
                    .create_subitem(&parent_item_id, &request.item_title, column_values.as_ref())
                    .await?;
                let item_id = id_at(&envelope, "/data/create_subitem/id")?;
                // Sub-items live on their own board when the service reports one.
                let board_id =
                    id_at(&envelope, "/data/create_subitem/board/id").unwrap_or(request.board_id);
                ("sub-item", board_id, item_id)
            }
            (Some(_), Some(_)) => {
                return Err(MondayMcpError::InvalidArgumentCombination(
                    "You can set either groupId or parentItemId argument, but not both.".into(),
                ))
            }
            (None, None) => {
                return Err(MondayMcpError::InvalidArgumentCombination(
                    "You must set either groupId or parentItemId argument.".into(),
                ))
            }
        };

        Ok(format!(
            "Created a new Monday.com {kind}. URL: {}",
            context.config.item_url(&board_id, &item_id)
        ))
    }
}

#[async_trait]
impl McpTool for CreateItemTool {
    fn name(&self) -> &'static str {
        "create-item"
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
                    "description": "Monday.com Board ID that the Item or Sub-item is on"
                },
                "itemTitle": {
                    "type": "string",
                    "description": "Name of the Monday.com Item or Sub-item that will be created"
                },
                "groupId": {
                    "type": "string",
                    "description": "Monday.com Board's Group ID to create the Item in. Set this or parentItemId, not both"
                },
                "parentItemId": {
                    "type": "string",
                    "description": "Monday.com Item ID to create the Sub-item under. Set this or groupId, not both"
                },
                "columnValues": {
                    "type": "object",
                    "description": "Column values keyed by column ID, e.g. {\"status\": {\"label\": \"Done\"}}",
                    "additionalProperties": true
                }
            },
            "required": ["boardId", "itemTitle"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: CreateItemRequest = BaseToolImpl::parse_arguments(self.name(), arguments)?;
        tracing::debug!(
            "Creating item '{}' on board {}",
            request.item_title,
            request.board_id
        );
        BaseToolImpl::finish(
            "creating Monday.com item",
            Self::create(request, context).await,
        )
    }
}
