//! Exit code constants for CLI commands
//!
//! These constants define the standard exit codes used throughout the application:
//! - 0: Success
//! - 1: Runtime failure, or a tool that returned an error result
//! - 2: Malformed call or missing configuration

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Runtime failure or error-tagged tool result
pub const EXIT_FAILURE: i32 = 1;

/// Usage or configuration errors
pub const EXIT_USAGE: i32 = 2;
