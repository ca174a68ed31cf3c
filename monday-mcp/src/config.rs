//! Configuration management for the Monday.com MCP server
//!
//! Values come from environment variables with sensible defaults. Only the API
//! key and the workspace location are mandatory.

use crate::common::env_loader::EnvLoader;
use thiserror::Error;

/// Default GraphQL endpoint of the Monday.com API
pub const DEFAULT_API_URL: &str = "https://api.monday.com/v2";

const ENV_PREFIX: &str = "MONDAY";

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A mandatory setting has no value
    #[error("Missing configuration value '{key}'\n{hint}")]
    Missing {
        /// Environment variable that was expected
        key: String,
        /// Helpful hint about how to fix the issue
        hint: String,
    },

    /// Invalid configuration value for a specific field
    #[error("Invalid configuration value for '{field}': {value}\n{hint}")]
    InvalidValue {
        /// Name of the configuration field that has an invalid value
        field: String,
        /// The invalid value that was provided
        value: String,
        /// Helpful hint about how to fix the issue
        hint: String,
    },
}

impl From<ConfigError> for crate::MondayMcpError {
    fn from(err: ConfigError) -> Self {
        crate::MondayMcpError::Config(err.to_string())
    }
}

/// Connection settings for the Monday.com API
#[derive(Clone)]
pub struct MondayConfig {
    /// Personal or application API token
    pub api_key: String,
    /// GraphQL endpoint
    pub api_url: String,
    /// Optional `API-Version` header value, e.g. "2024-10"
    pub api_version: Option<String>,
    /// Human-facing workspace base, e.g. `https://acme.monday.com`
    pub workspace_url: String,
}

impl std::fmt::Debug for MondayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MondayConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .field("workspace_url", &self.workspace_url)
            .finish()
    }
}

impl MondayConfig {
    /// Create a configuration with the default API endpoint
    pub fn new(api_key: impl Into<String>, workspace_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            api_version: None,
            workspace_url: normalize_base(workspace_url.into()),
        }
    }

    /// Override the GraphQL endpoint
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Pin the API version header
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Load configuration from the process environment.
    ///
    /// Reads `MONDAY_API_KEY`, `MONDAY_WORKSPACE_URL` or `MONDAY_WORKSPACE_NAME`,
    /// `MONDAY_API_URL` and `MONDAY_API_VERSION`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = EnvLoader::new(ENV_PREFIX);

        let api_key: String = env.load_optional("API_KEY").ok_or_else(|| ConfigError::Missing {
            key: env.key("API_KEY"),
            hint: "Create a token under Profile > Developers > My access tokens and export it"
                .to_string(),
        })?;

        let workspace_url = match env.load_optional::<String>("WORKSPACE_URL") {
            Some(url) => url,
            None => {
                let name: String =
                    env.load_optional("WORKSPACE_NAME")
                        .ok_or_else(|| ConfigError::Missing {
                            key: env.key("WORKSPACE_NAME"),
                            hint: format!(
                                "Set it to the subdomain of your workspace (acme for acme.monday.com), or set {} instead",
                                env.key("WORKSPACE_URL")
                            ),
                        })?;
                format!("https://{name}.monday.com")
            }
        };

        let config = Self {
            api_key,
            api_url: env.load_string("API_URL", DEFAULT_API_URL),
            api_version: env.load_optional("API_VERSION"),
            workspace_url: normalize_base(workspace_url),
        };
        config.validate()?;

        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Check that both URLs parse
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("api_url", &self.api_url),
            ("workspace_url", &self.workspace_url),
        ] {
            if let Err(e) = url::Url::parse(value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.clone(),
                    hint: format!("Expected an absolute URL ({e})"),
                });
            }
        }
        Ok(())
    }

    /// Link to an item as shown in the Monday.com web UI
    pub fn item_url(&self, board_id: &str, item_id: &str) -> String {
        format!("{}/boards/{}/pulses/{}", self.workspace_url, board_id, item_id)
    }
}

fn normalize_base(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
