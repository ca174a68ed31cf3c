//! Board listing tool

use crate::error::{MondayMcpError, Result};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::monday::types::{decode_at, BoardSummary};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Deserialize;

/// Number of boards returned when the caller does not pick a limit
pub const DEFAULT_LIMIT: u32 = 100;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// Request to list boards
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListBoardsRequest {
    /// Maximum number of boards to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Tool for listing the boards visible to the API key
#[derive(Default)]
pub struct ListBoardsTool;

impl ListBoardsTool {
    /// Creates a new instance of the ListBoardsTool
    pub fn new() -> Self {
        Self
    }

    async fn list(limit: u32, context: &ToolContext) -> Result<String> {
        let envelope = context.client.fetch_boards(limit).await?;
        let boards: Vec<BoardSummary> = decode_at(&envelope, "/data/boards")?;
        if boards.is_empty() {
            return Err(MondayMcpError::NotFound(
                "No Monday.com boards found.".to_string(),
            ));
        }

        let lines: Vec<String> = boards
            .iter()
            .map(|board| format!("- {} (ID: {})", board.name, board.id))
            .collect();
        Ok(format!("Available Monday.com Boards:\n{}", lines.join("\n")))
    }
}

#[async_trait]
impl McpTool for ListBoardsTool {
    fn name(&self) -> &'static str {
        "list-boards"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Maximum number of boards to return (default 100)"
                }
            }
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: ListBoardsRequest = BaseToolImpl::parse_arguments(self.name(), arguments)?;
        BaseToolImpl::finish(
            "listing Monday.com boards",
            Self::list(request.limit, context).await,
        )
    }
}
