//! Common utilities module
//!
//! This module provides shared utilities used throughout the crate.

/// Environment variable loading utilities
pub mod env_loader;

pub use env_loader::{load_env_optional, load_env_string, EnvLoader};
