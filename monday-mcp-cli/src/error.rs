//! Error handling for the monday-mcp CLI
//!
//! This module provides an error type that preserves error context while still
//! providing appropriate exit codes for CLI applications.

use crate::exit_codes::{EXIT_FAILURE, EXIT_USAGE};
use std::error::Error;
use std::fmt;

/// CLI-specific result type that preserves error information
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type that includes both error information and suggested exit code
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    /// Create a new CLI error with a message and exit code
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
        }
    }

    /// Create a CLI error from another error with a specific exit code
    pub fn from_error<E: Error + Send + Sync + 'static>(error: E, exit_code: i32) -> Self {
        let message = error.to_string();
        Self {
            message,
            exit_code,
            source: Some(Box::new(error)),
        }
    }

    /// Create a CLI error with exit code 1 (runtime failure)
    pub fn general<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self::from_error(error, EXIT_FAILURE)
    }

    /// Create a CLI error with exit code 2 (usage or configuration error)
    pub fn validation<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self::from_error(error, EXIT_USAGE)
    }

    /// Get the full error chain as a formatted string
    pub fn full_chain(&self) -> String {
        let mut result = self.message.clone();

        // The top-level message already is the source's Display.
        let mut current_source = self.source().and_then(|s| s.source());
        while let Some(err) = current_source {
            result.push_str(&format!("\n  Caused by: {err}"));
            current_source = err.source();
        }

        result
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

/// Extension trait for converting results to CLI results
pub trait IntoCliResult<T> {
    fn cli_general_error(self) -> CliResult<T>;
    fn cli_validation_error(self) -> CliResult<T>;
}

impl<T, E: Error + Send + Sync + 'static> IntoCliResult<T> for Result<T, E> {
    fn cli_general_error(self) -> CliResult<T> {
        self.map_err(CliError::general)
    }

    fn cli_validation_error(self) -> CliResult<T> {
        self.map_err(CliError::validation)
    }
}

/// Convert a CliResult carrying an exit code into that code, printing the error chain on failure
pub fn handle_cli_result(result: CliResult<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e.full_chain());
            e.exit_code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(CliError::general(io).exit_code, EXIT_FAILURE);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "bad");
        assert_eq!(CliError::validation(io).exit_code, EXIT_USAGE);
    }

    #[test]
    fn test_handle_cli_result() {
        assert_eq!(handle_cli_result(Ok(0)), 0);
        assert_eq!(handle_cli_result(Ok(1)), 1);
        assert_eq!(handle_cli_result(Err(CliError::new("nope", 2))), 2);
    }

    #[test]
    fn test_into_cli_result() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let err = result.cli_validation_error().unwrap_err();
        assert_eq!(err.exit_code, EXIT_USAGE);
        assert_eq!(err.full_chain(), "missing");
    }
}
