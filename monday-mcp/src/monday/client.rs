//! HTTP client for the Monday.com GraphQL API

use super::query::{self, GraphQlQuery};
use super::MondayApi;
use crate::config::MondayConfig;
use crate::error::{MondayMcpError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Monday.com API client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct MondayClient {
    config: Arc<MondayConfig>,
    http: reqwest::Client,
}

impl MondayClient {
    /// Create a new client from configuration
    pub fn new(config: Arc<MondayConfig>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &MondayConfig {
        &self.config
    }

    /// Turn a decoded response body into an envelope or an upstream error
    fn check_envelope(envelope: Value) -> Result<Value> {
        if let Some(errors) = envelope.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let messages: Vec<String> = errors
                    .iter()
                    .map(|e| {
                        e.get("message")
                            .and_then(Value::as_str)
                            .map(str::to_string)
                            .unwrap_or_else(|| e.to_string())
                    })
                    .collect();
                return Err(MondayMcpError::Upstream(messages.join("; ")));
            }
        }

        if let Some(message) = envelope.get("error_message").and_then(Value::as_str) {
            return Err(MondayMcpError::Upstream(message.to_string()));
        }

        match envelope.get("data") {
            Some(data) if data.is_object() => Ok(envelope),
            _ => Err(MondayMcpError::malformed("missing 'data'")),
        }
    }
}

#[async_trait]
impl MondayApi for MondayClient {
    async fn create_item(
        &self,
        board_id: &str,
        group_id: &str,
        item_name: &str,
        column_values: Option<&Value>,
    ) -> Result<Value> {
        self.execute(&query::create_item(
            board_id,
            group_id,
            item_name,
            column_values,
        ))
        .await
    }

    async fn create_subitem(
        &self,
        parent_item_id: &str,
        item_name: &str,
        column_values: Option<&Value>,
    ) -> Result<Value> {
        self.execute(&query::create_subitem(
            parent_item_id,
            item_name,
            column_values,
        ))
        .await
    }

    async fn change_multiple_column_values(
        &self,
        board_id: &str,
        item_id: &str,
        column_values: &Value,
    ) -> Result<Value> {
        self.execute(&query::change_multiple_column_values(
            board_id,
            item_id,
            column_values,
        ))
        .await
    }

    async fn create_update(&self, item_id: &str, body: &str) -> Result<Value> {
        self.execute(&query::create_update(item_id, body)).await
    }

    async fn fetch_items_by_id(&self, item_ids: &[String]) -> Result<Value> {
        self.execute(&query::items_by_id(item_ids)).await
    }

    async fn move_item_to_group(&self, item_id: &str, group_id: &str) -> Result<Value> {
        self.execute(&query::move_item_to_group(item_id, group_id))
            .await
    }

    async fn delete_item(&self, item_id: &str) -> Result<Value> {
        self.execute(&query::delete_item(item_id)).await
    }

    async fn archive_item(&self, item_id: &str) -> Result<Value> {
        self.execute(&query::archive_item(item_id)).await
    }

    async fn fetch_boards(&self, limit: u32) -> Result<Value> {
        self.execute(&query::boards(limit)).await
    }

    async fn get_groups_by_board(&self, board_id: &str) -> Result<Value> {
        self.execute(&query::board_groups(board_id)).await
    }

    async fn execute(&self, query: &GraphQlQuery) -> Result<Value> {
        tracing::debug!(
            "Monday.com request with variables {}",
            serde_json::Value::Object(query.variables().clone())
        );

        let mut request = self
            .http
            .post(&self.config.api_url)
            .header("Authorization", &self.config.api_key)
            .json(query);
        if let Some(version) = &self.config.api_version {
            request = request.header("API-Version", version);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Monday.com API returned {}: {}", status, body);
            // Error bodies usually carry the same envelope; prefer its message.
            if let Ok(envelope) = serde_json::from_str::<Value>(&body) {
                Self::check_envelope(envelope)?;
            }
            return Err(MondayMcpError::Upstream(format!(
                "HTTP {status}: {body}"
            )));
        }

        let envelope: Value = serde_json::from_str(&body)
            .map_err(|e| MondayMcpError::malformed(format!("invalid JSON body: {e}")))?;
        Self::check_envelope(envelope)
    }
}
