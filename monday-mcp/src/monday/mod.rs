//! Monday.com API access
//!
//! The [`MondayApi`] trait is the seam between the tool handlers and the remote
//! service. [`MondayClient`] talks to the real GraphQL endpoint over HTTP and
//! [`mock::MockMondayClient`] records calls in memory for tests.
//!
//! Every method returns the raw response envelope, a JSON object with a `data`
//! member, so handlers can render exactly what the service returned.

pub mod client;
pub mod mock;
pub mod query;
pub mod types;

pub use client::MondayClient;
pub use query::GraphQlQuery;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Operations consumed from the Monday.com API
#[async_trait]
pub trait MondayApi: Send + Sync {
    /// Create an item in a group of a board
    async fn create_item(
        &self,
        board_id: &str,
        group_id: &str,
        item_name: &str,
        column_values: Option<&Value>,
    ) -> Result<Value>;

    /// Create a sub-item under an existing item
    async fn create_subitem(
        &self,
        parent_item_id: &str,
        item_name: &str,
        column_values: Option<&Value>,
    ) -> Result<Value>;

    /// Update several column values of an item in one call
    async fn change_multiple_column_values(
        &self,
        board_id: &str,
        item_id: &str,
        column_values: &Value,
    ) -> Result<Value>;

    /// Post an update (comment) on an item
    async fn create_update(&self, item_id: &str, body: &str) -> Result<Value>;

    /// Fetch items by identifier
    async fn fetch_items_by_id(&self, item_ids: &[String]) -> Result<Value>;

    /// Move an item to another group of its board
    async fn move_item_to_group(&self, item_id: &str, group_id: &str) -> Result<Value>;

    /// Delete an item
    async fn delete_item(&self, item_id: &str) -> Result<Value>;

    /// Archive an item
    async fn archive_item(&self, item_id: &str) -> Result<Value>;

    /// List boards visible to the token
    async fn fetch_boards(&self, limit: u32) -> Result<Value>;

    /// List the groups of a board
    async fn get_groups_by_board(&self, board_id: &str) -> Result<Value>;

    /// Run an arbitrary parameterized query
    async fn execute(&self, query: &GraphQlQuery) -> Result<Value>;
}
