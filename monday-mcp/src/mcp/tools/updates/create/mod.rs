//! Update creation tool

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::types::id_string;
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;

/// Request to post an update on an item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUpdateRequest {
    /// Item to comment on
    #[serde(deserialize_with = "id_string")]
    pub item_id: String,
    /// Update body
    pub update_text: String,
}

/// Tool for posting an update on an item
#[derive(Default)]
pub struct CreateUpdateTool;

impl CreateUpdateTool {
    /// Creates a new instance of the CreateUpdateTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for CreateUpdateTool {
    fn name(&self) -> &'static str {
        "create-update"
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
                    "description": "Monday.com Item ID to post the update on"
                },
                "updateText": {
                    "type": "string",
                    "description": "Content of the update; HTML is accepted"
                }
            },
            "required": ["itemId", "updateText"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: CreateUpdateRequest = BaseToolImpl::parse_arguments(self.name(), arguments)?;

        let outcome = context
            .client
            .create_update(&request.item_id, &request.update_text)
            .await
            .map(|_| {
                format!(
                    "Created new update on Monday.com item {}: {}",
                    request.item_id, request.update_text
                )
            });
        BaseToolImpl::finish("creating Monday.com update", outcome)
    }
}
