//! monday-mcp CLI Library
//!
//! Command-line definitions, logging setup and exit codes for the
//! `monday-mcp` binary, exposed for integration tests.

/// Command-line interface definitions and argument parsing
pub mod cli;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Tracing subscriber setup and the MCP-mode log file writer
pub mod logging;
