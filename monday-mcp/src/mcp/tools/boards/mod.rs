//! Board tools for MCP operations
//!
//! Read-only tools describing boards: which boards exist and how a board is laid
//! out in groups and columns. Callers usually need these identifiers before they
//! can create or update items.

pub mod columns;
pub mod groups;
pub mod list;

use crate::error::{MondayMcpError, Result};
use crate::mcp::shared_utils::McpFormatter;
use crate::mcp::tool_registry::ToolRegistry;
use serde_json::Value;

/// Register all board-related tools with the registry
pub fn register_board_tools(registry: &mut ToolRegistry) {
    registry.register(groups::GetBoardGroupsTool::new());
    registry.register(columns::GetBoardColumnsTool::new());
    registry.register(list::ListBoardsTool::new());
}

/// Render the `data` member of a per-board answer under a heading.
///
/// An empty `boards` list means the board id matched nothing.
pub(crate) fn render_board_data(what: &str, board_id: &str, envelope: &Value) -> Result<String> {
    let found = envelope
        .pointer("/data/boards")
        .and_then(Value::as_array)
        .is_some_and(|boards| !boards.is_empty());
    if !found {
        return Err(MondayMcpError::NotFound(format!(
            "Board {board_id} not found."
        )));
    }

    Ok(format!(
        "Got the {what} of Monday.com board {board_id}. {}",
        McpFormatter::format_json(&envelope["data"])
    ))
}
