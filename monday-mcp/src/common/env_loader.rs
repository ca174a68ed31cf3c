//! Environment variable loading utilities
//!
//! This module provides common patterns for loading environment variables
//! with type conversion and fallback defaults.

use std::env;
use std::str::FromStr;

/// Load an environment variable with a string default
pub fn load_env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load an environment variable as an Option<T>
///
/// Unset, empty, and unparseable values all yield `None`.
pub fn load_env_optional<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| v.trim().parse().ok())
}

/// Builder for loading multiple environment variables with consistent prefix
#[derive(Debug)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a new environment loader with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Full variable name for a suffix
    pub fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    /// Load a string value with default
    pub fn load_string(&self, suffix: &str, default: &str) -> String {
        load_env_string(&self.key(suffix), default)
    }

    /// Load an optional value
    pub fn load_optional<T>(&self, suffix: &str) -> Option<T>
    where
        T: FromStr,
    {
        load_env_optional(&self.key(suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_env_string() {
        let key = "MONDAY_TEST_STRING_VAR";
        let default = "default_value";

        env::remove_var(key);
        assert_eq!(load_env_string(key, default), default);

        env::set_var(key, "test_value");
        assert_eq!(load_env_string(key, default), "test_value");

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_load_env_optional() {
        let key = "MONDAY_TEST_OPTIONAL_VAR";

        env::remove_var(key);
        assert_eq!(load_env_optional::<u32>(key), None);

        env::set_var(key, "456");
        assert_eq!(load_env_optional::<u32>(key), Some(456));

        env::set_var(key, "   ");
        assert_eq!(load_env_optional::<String>(key), None);

        env::set_var(key, "invalid");
        assert_eq!(load_env_optional::<u32>(key), None);

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_env_loader() {
        let loader = EnvLoader::new("MONDAY_LOADER_TEST");
        assert_eq!(loader.key("STRING"), "MONDAY_LOADER_TEST_STRING");

        env::remove_var("MONDAY_LOADER_TEST_STRING");
        assert_eq!(loader.load_string("STRING", "default"), "default");

        env::set_var("MONDAY_LOADER_TEST_STRING", "value");
        assert_eq!(loader.load_string("STRING", "default"), "value");
        assert_eq!(
            loader.load_optional::<String>("STRING"),
            Some("value".to_string())
        );

        env::remove_var("MONDAY_LOADER_TEST_STRING");
    }
}
