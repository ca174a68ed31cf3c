//! # monday-mcp
//!
//! Monday.com tools for AI assistants, served over the Model Context Protocol.
//!
//! ## Features
//!
//! - **Tool Catalog**: fourteen tools covering boards, groups, columns, items,
//!   sub-items and updates, each with a JSON schema for its arguments
//! - **Dispatcher**: name lookup, required-argument checks and typed decoding
//!   before any tool runs
//! - **Monday.com Client**: parameterized GraphQL over HTTP, plus an in-memory
//!   mock for tests
//! - **MCP Support**: an `rmcp` server handler ready to serve on stdio
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use monday_mcp::config::MondayConfig;
//! use monday_mcp::mcp::McpServer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let server = McpServer::new(MondayConfig::from_env()?)?;
//!
//! let mut arguments = serde_json::Map::new();
//! arguments.insert("limit".into(), serde_json::json!(10));
//! let result = server.dispatch("list-boards", arguments).await?;
//! println!("{:?}", result.content);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Shared helpers
pub mod common;

/// Configuration loaded from the environment
pub mod config;

/// Error types used throughout the library
pub mod error;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Monday.com API access
pub mod monday;

pub use config::MondayConfig;
pub use error::{MondayMcpError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::MondayConfig;
    pub use crate::mcp::{McpServer, McpTool, ToolContext, ToolRegistry};
    pub use crate::monday::{MondayApi, MondayClient};
    pub use crate::{MondayMcpError, Result};
}

/// Test utilities module for testing support
#[doc(hidden)]
pub mod test_utils;
