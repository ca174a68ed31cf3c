//! Shared utilities for MCP operations
//!
//! This module provides common functionality used across MCP tool handlers
//! to reduce code duplication and ensure consistent behavior.

use crate::error::{MondayMcpError, Result};
use crate::monday::types::ItemUpdate;
use rmcp::Error as McpError;
use serde_json::{Map, Value};

/// Common error handling patterns for MCP operations
pub struct McpErrorHandler;

impl McpErrorHandler {
    /// Convert a raised `MondayMcpError` to the protocol error the caller sees
    ///
    /// - Unknown tools -> invalid_request
    /// - Missing or malformed arguments -> invalid_params
    /// - Anything else reaching this point -> internal_error
    pub fn handle_error(error: MondayMcpError, operation: &str) -> McpError {
        tracing::error!("MCP operation '{}' failed: {}", operation, error);

        match error {
            MondayMcpError::UnknownTool(_) => McpError::invalid_request(error.to_string(), None),
            MondayMcpError::MissingArgument { .. } | MondayMcpError::InvalidArguments { .. } => {
                McpError::invalid_params(error.to_string(), None)
            }
            other => McpError::internal_error(other.to_string(), None),
        }
    }
}

/// Validation utilities for MCP requests
pub struct McpValidation;

impl McpValidation {
    /// Check that every field listed in a JSON schema's `required` array is
    /// present in the arguments and not null. Blank strings are values.
    pub fn validate_required(
        tool: &str,
        schema: &Value,
        arguments: &Map<String, Value>,
    ) -> Result<()> {
        let required = schema
            .get("required")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for field in required.iter().filter_map(Value::as_str) {
            if matches!(arguments.get(field), None | Some(Value::Null)) {
                return Err(MondayMcpError::MissingArgument {
                    tool: tool.to_string(),
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Formatting utilities for consistent MCP responses
pub struct McpFormatter;

impl McpFormatter {
    /// Compact JSON rendering of a response payload
    pub fn format_json(value: &Value) -> String {
        value.to_string()
    }

    /// Render a list of names as a JSON-style array, e.g. `["Alpha", "Beta"]`
    pub fn format_name_list<S: AsRef<str>>(names: &[S]) -> String {
        let quoted: Vec<String> = names
            .iter()
            .map(|n| Value::String(n.as_ref().to_string()).to_string())
            .collect();
        format!("[{}]", quoted.join(", "))
    }

    /// Render a single update as a block of labelled lines
    pub fn format_update(update: &ItemUpdate) -> String {
        let mut block = format!("Update ID: {}\n", update.id);
        block.push_str(&format!("Created: {}\n", update.created_at));
        match &update.creator {
            Some(creator) => {
                block.push_str(&format!("Creator: {} (ID: {})\n", creator.name, creator.id))
            }
            None => block.push_str("Creator: unknown\n"),
        }
        block.push_str(&format!("Body: {}", update.body));

        if !update.assets.is_empty() {
            block.push_str("\n\nAttached Files:");
            for asset in &update.assets {
                block.push_str(&format!("\n- {}: {}", asset.name, asset.url));
            }
        }

        block
    }
}
