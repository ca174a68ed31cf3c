//! Tool registry for MCP operations
//!
//! This module holds the tool catalog and the dispatcher. Tools register once at
//! start-up; afterwards the registry is only read. Dispatch looks a tool up by
//! name, checks the schema's required arguments, and hands the argument map to
//! the tool, which decodes it into its own typed request.

use super::shared_utils::McpValidation;
use crate::config::MondayConfig;
use crate::error::{MondayMcpError, Result};
use crate::monday::MondayApi;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};
use std::fmt::Display;
use std::sync::Arc;

/// Context shared by all tools during execution
#[derive(Clone)]
pub struct ToolContext {
    /// Client for the Monday.com API
    pub client: Arc<dyn MondayApi>,
    /// Connection settings, used for building item links
    pub config: Arc<MondayConfig>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(client: Arc<dyn MondayApi>, config: Arc<MondayConfig>) -> Self {
        Self { client, config }
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context.
    ///
    /// Returns `Err` only for call-shape faults; tool outcomes, including
    /// upstream failures, come back as error-tagged results.
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<&'static str, Box<dyn McpTool>>,
}

static CATALOG: Lazy<ToolRegistry> = Lazy::new(|| {
    let mut registry = ToolRegistry::new();
    crate::mcp::tools::register_all_tools(&mut registry);
    registry
});

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    /// The process-wide catalog with every Monday.com tool registered
    pub fn catalog() -> &'static ToolRegistry {
        &CATALOG
    }

    /// Register a tool in the registry.
    ///
    /// Registering a second tool under an existing name replaces the first while
    /// keeping its position.
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name(), Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names in registration order
    pub fn list_tool_names(&self) -> Vec<&'static str> {
        self.tools.keys().copied().collect()
    }

    /// Get all registered tools as Tool objects for MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let serde_json::Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Route a call to the named tool.
    ///
    /// Fails with `UnknownTool` for names outside the catalog and with
    /// `MissingArgument` when a required argument is absent, before the tool
    /// runs. Every invocation is logged; failures are logged and then returned.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        tracing::info!("Calling tool '{}'", name);

        let outcome = match self.get_tool(name) {
            Some(tool) => {
                match McpValidation::validate_required(name, &tool.schema(), &arguments) {
                    Ok(()) => tool.execute(arguments, context).await,
                    Err(e) => Err(e),
                }
            }
            None => Err(MondayMcpError::UnknownTool(name.to_string())),
        };

        match &outcome {
            Ok(result) if result.is_error == Some(true) => {
                tracing::warn!(
                    "Tool '{}' returned an error result: {}",
                    name,
                    BaseToolImpl::result_text(result)
                );
            }
            Ok(_) => tracing::debug!("Tool '{}' completed", name),
            Err(e) => tracing::error!("Error calling tool '{}': {}", name, e),
        }

        outcome
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct
    ///
    /// # Arguments
    ///
    /// * `tool` - Name of the tool, for error reporting
    /// * `arguments` - The JSON map of arguments from the MCP request
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        tool: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<T> {
        serde_json::from_value(serde_json::Value::Object(arguments)).map_err(|e| {
            MondayMcpError::InvalidArguments {
                tool: tool.to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Create a success response with a single text block
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: content.into(),
                }),
                None,
            )],
            is_error: Some(false),
        }
    }

    /// Create an error response with the given error message
    ///
    /// # Arguments
    ///
    /// * `error` - The error message
    /// * `details` - Optional additional details
    pub fn create_error_response<T: Into<String>>(
        error: T,
        details: Option<String>,
    ) -> CallToolResult {
        let error_text = match details {
            Some(details) => format!("{}: {}", error.into(), details),
            None => error.into(),
        };

        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent { text: error_text }),
                None,
            )],
            is_error: Some(true),
        }
    }

    /// Turn a handler outcome into a tool result.
    ///
    /// Conflicting arguments and empty lookups carry their own message. Upstream
    /// and transport failures are prefixed with the operation that failed, e.g.
    /// `Error creating Monday.com item: ...`. Call-shape faults are passed
    /// through as `Err` for the protocol layer to raise.
    pub fn finish(operation: impl Display, outcome: Result<String>) -> Result<CallToolResult> {
        match outcome {
            Ok(text) => Ok(Self::create_success_response(text)),
            Err(e) if e.is_call_fault() => Err(e),
            Err(e @ MondayMcpError::InvalidArgumentCombination(_))
            | Err(e @ MondayMcpError::NotFound(_)) => {
                Ok(Self::create_error_response(e.to_string(), None))
            }
            Err(e) => Ok(Self::create_error_response(
                format!("Error {operation}"),
                Some(e.to_string()),
            )),
        }
    }

    /// Concatenated text of all text blocks in a result
    pub fn result_text(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| match &c.raw {
                RawContent::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
