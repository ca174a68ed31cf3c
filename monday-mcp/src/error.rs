//! Error types for the Monday.com MCP server
//!
//! Every failure in the crate collapses into [`MondayMcpError`]. The variants are
//! split into two families: call-shape faults (unknown tool, missing or malformed
//! arguments) which the protocol layer raises, and tool outcomes (conflicting
//! arguments, empty lookups, upstream failures) which are returned to the calling
//! agent as error-tagged text.

use thiserror::Error;

/// The main error type for the Monday.com MCP library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MondayMcpError {
    /// The requested tool name is not in the catalog
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A required argument was absent or null
    #[error("Missing required argument '{field}' for tool '{tool}'")]
    MissingArgument {
        /// Tool that was called
        tool: String,
        /// Name of the missing argument
        field: String,
    },

    /// Arguments could not be decoded into the tool's input type
    #[error("Invalid arguments for tool '{tool}': {message}")]
    InvalidArguments {
        /// Tool that was called
        tool: String,
        /// Decoder message
        message: String,
    },

    /// Arguments are individually valid but cannot be combined
    #[error("{0}")]
    InvalidArgumentCombination(String),

    /// The service answered, but with nothing matching the request
    #[error("{0}")]
    NotFound(String),

    /// The service rejected the request or returned a malformed envelope
    #[error("Monday.com API error: {0}")]
    Upstream(String),

    /// Transport-level failure talking to the service
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MondayMcpError {
    /// Build an upstream error for a response that lacks an expected field
    pub fn malformed(what: impl std::fmt::Display) -> Self {
        Self::Upstream(format!("malformed response: {what}"))
    }

    /// Whether this error describes a bad tool call rather than a tool outcome.
    ///
    /// Call-shape faults are raised to the protocol layer; everything else is
    /// rendered as an error-tagged tool result.
    pub fn is_call_fault(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool(_) | Self::MissingArgument { .. } | Self::InvalidArguments { .. }
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MondayMcpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_faults_are_classified() {
        assert!(MondayMcpError::UnknownTool("nope".into()).is_call_fault());
        assert!(MondayMcpError::MissingArgument {
            tool: "create-item".into(),
            field: "boardId".into(),
        }
        .is_call_fault());
        assert!(MondayMcpError::InvalidArguments {
            tool: "list-boards".into(),
            message: "bad".into(),
        }
        .is_call_fault());

        assert!(!MondayMcpError::NotFound("x".into()).is_call_fault());
        assert!(!MondayMcpError::Upstream("x".into()).is_call_fault());
        assert!(!MondayMcpError::InvalidArgumentCombination("x".into()).is_call_fault());
    }

    #[test]
    fn test_error_messages() {
        let err = MondayMcpError::MissingArgument {
            tool: "delete-item".into(),
            field: "itemId".into(),
        };
        assert_eq!(
            err.to_string(),
            "Missing required argument 'itemId' for tool 'delete-item'"
        );

        let err = MondayMcpError::malformed("missing 'data'");
        assert_eq!(
            err.to_string(),
            "Monday.com API error: malformed response: missing 'data'"
        );
    }
}
