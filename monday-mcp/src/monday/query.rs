//! Parameterized GraphQL documents for the Monday.com API
//!
//! Each document is a constant with declared variables. Identifiers supplied by
//! callers travel in the `variables` object only, so they are never spliced into
//! query text.

use serde::Serialize;
use serde_json::{Map, Value};

/// Page size used when resolving an item by name within a group
pub const NAME_LOOKUP_PAGE_SIZE: u32 = 50;

/// A GraphQL document together with its variables
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlQuery {
    #[serde(rename = "query")]
    document: &'static str,
    variables: Map<String, Value>,
}

impl GraphQlQuery {
    /// Start a query from a document with no variables bound
    pub fn new(document: &'static str) -> Self {
        Self {
            document,
            variables: Map::new(),
        }
    }

    /// Bind a variable
    pub fn variable(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.variables.insert(name.to_string(), value.into());
        self
    }

    /// Bind a variable only when a value is present
    pub fn optional_variable(self, name: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.variable(name, value),
            None => self,
        }
    }

    /// The GraphQL document text
    pub fn document(&self) -> &str {
        self.document
    }

    /// Bound variables
    pub fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }
}

/// The service's `JSON` scalar is transported as an encoded string
fn json_scalar(value: &Value) -> Value {
    Value::String(value.to_string())
}

fn id_list<S: AsRef<str>>(ids: &[S]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| Value::String(id.as_ref().to_string()))
            .collect(),
    )
}

const ITEMS_IN_GROUPS_FILTERED: &str = r#"query ($boardIds: [ID!], $queryParams: ItemsQuery, $limit: Int!) {
  boards (ids: $boardIds) {
    items_page (query_params: $queryParams, limit: $limit) {
      cursor
      items {
        id
        name
        updates { id body }
        column_values { id text value }
      }
    }
  }
}"#;

const ITEMS_IN_GROUPS_CURSOR: &str = r#"query ($boardIds: [ID!], $cursor: String, $limit: Int!) {
  boards (ids: $boardIds) {
    items_page (cursor: $cursor, limit: $limit) {
      cursor
      items {
        id
        name
        updates { id body }
        column_values { id text value }
      }
    }
  }
}"#;

const ITEMS_PAGE_UNFILTERED: &str = r#"query ($boardIds: [ID!], $limit: Int!) {
  boards (ids: $boardIds) {
    items_page (limit: $limit) {
      cursor
      items {
        id
        name
        updates { id body }
        column_values { id text value }
      }
    }
  }
}"#;

const ITEMS_IN_GROUP_BY_NAME: &str = r#"query ($boardIds: [ID!], $queryParams: ItemsQuery, $limit: Int!) {
  boards (ids: $boardIds) {
    items_page (query_params: $queryParams, limit: $limit) {
      items {
        id
        name
        column_values { id text value }
      }
    }
  }
}"#;

const SUBITEMS_OF_ITEMS: &str = r#"query ($itemIds: [ID!]) {
  items (ids: $itemIds) {
    subitems {
      id
      name
      parent_item { id }
      updates { id body }
      column_values { id text value }
    }
  }
}"#;

const ITEM_UPDATES: &str = r#"query ($itemIds: [ID!], $limit: Int) {
  items (ids: $itemIds) {
    updates (limit: $limit) {
      id
      body
      created_at
      creator { id name }
      assets { id name url }
    }
  }
}"#;

const BOARD_COLUMNS: &str = r#"query ($boardIds: [ID!]) {
  boards (ids: $boardIds) {
    columns { id title type settings_str }
  }
}"#;

const BOARD_GROUPS: &str = r#"query ($boardIds: [ID!]) {
  boards (ids: $boardIds) {
    groups { id title }
  }
}"#;

const BOARDS: &str = r#"query ($limit: Int) {
  boards (limit: $limit) { id name }
}"#;

const ITEMS_BY_ID: &str = r#"query ($itemIds: [ID!]) {
  items (ids: $itemIds) {
    id
    name
    state
    created_at
    updated_at
    board { id name }
    group { id title }
    column_values { id text value }
  }
}"#;

const CREATE_ITEM: &str = r#"mutation ($boardId: ID!, $groupId: String, $itemName: String!, $columnValues: JSON) {
  create_item (board_id: $boardId, group_id: $groupId, item_name: $itemName, column_values: $columnValues) { id }
}"#;

const CREATE_SUBITEM: &str = r#"mutation ($parentItemId: ID!, $itemName: String!, $columnValues: JSON) {
  create_subitem (parent_item_id: $parentItemId, item_name: $itemName, column_values: $columnValues) { id board { id } }
}"#;

const CHANGE_MULTIPLE_COLUMN_VALUES: &str = r#"mutation ($boardId: ID!, $itemId: ID!, $columnValues: JSON!) {
  change_multiple_column_values (board_id: $boardId, item_id: $itemId, column_values: $columnValues) { id }
}"#;

const CREATE_UPDATE: &str = r#"mutation ($itemId: ID!, $body: String!) {
  create_update (item_id: $itemId, body: $body) { id }
}"#;

const MOVE_ITEM_TO_GROUP: &str = r#"mutation ($itemId: ID!, $groupId: String!) {
  move_item_to_group (item_id: $itemId, group_id: $groupId) { id }
}"#;

const DELETE_ITEM: &str = r#"mutation ($itemId: ID!) {
  delete_item (item_id: $itemId) { id }
}"#;

const ARCHIVE_ITEM: &str = r#"mutation ($itemId: ID!) {
  archive_item (item_id: $itemId) { id }
}"#;

/// Rule set restricting an items page to the given groups
fn group_filter<S: AsRef<str>>(group_ids: &[S]) -> Value {
    serde_json::json!({
        "rules": [
            {
                "column_id": "group",
                "compare_value": id_list(group_ids),
                "operator": "any_of"
            }
        ]
    })
}

/// Page through items of a board, filtered to groups on the first page.
///
/// A cursor already encodes the filter of the page it came from, so when one is
/// supplied only the cursor and limit are sent.
pub fn items_in_groups<S: AsRef<str>>(
    board_id: &str,
    group_ids: &[S],
    limit: u32,
    cursor: Option<&str>,
) -> GraphQlQuery {
    let query = match cursor {
        Some(cursor) => GraphQlQuery::new(ITEMS_IN_GROUPS_CURSOR).variable("cursor", cursor),
        None if !group_ids.is_empty() => GraphQlQuery::new(ITEMS_IN_GROUPS_FILTERED)
            .variable("queryParams", group_filter(group_ids)),
        None => GraphQlQuery::new(ITEMS_PAGE_UNFILTERED),
    };
    query
        .variable("boardIds", id_list(&[board_id]))
        .variable("limit", limit)
}

/// Items of a single group, used to resolve an item by its display name
pub fn items_in_group(board_id: &str, group_id: &str, limit: u32) -> GraphQlQuery {
    GraphQlQuery::new(ITEMS_IN_GROUP_BY_NAME)
        .variable("boardIds", id_list(&[board_id]))
        .variable("queryParams", group_filter(&[group_id]))
        .variable("limit", limit)
}

/// Sub-items of each given item
pub fn subitems_of_items<S: AsRef<str>>(item_ids: &[S]) -> GraphQlQuery {
    GraphQlQuery::new(SUBITEMS_OF_ITEMS).variable("itemIds", id_list(item_ids))
}

/// Updates posted on an item, with their attachments
pub fn item_updates(item_id: &str, limit: u32) -> GraphQlQuery {
    GraphQlQuery::new(ITEM_UPDATES)
        .variable("itemIds", id_list(&[item_id]))
        .variable("limit", limit)
}

/// Column definitions of a board
pub fn board_columns(board_id: &str) -> GraphQlQuery {
    GraphQlQuery::new(BOARD_COLUMNS).variable("boardIds", id_list(&[board_id]))
}

/// Groups of a board
pub fn board_groups(board_id: &str) -> GraphQlQuery {
    GraphQlQuery::new(BOARD_GROUPS).variable("boardIds", id_list(&[board_id]))
}

/// Boards visible to the token
pub fn boards(limit: u32) -> GraphQlQuery {
    GraphQlQuery::new(BOARDS).variable("limit", limit)
}

/// Items by identifier
pub fn items_by_id<S: AsRef<str>>(item_ids: &[S]) -> GraphQlQuery {
    GraphQlQuery::new(ITEMS_BY_ID).variable("itemIds", id_list(item_ids))
}

/// Create an item in a group
pub fn create_item(
    board_id: &str,
    group_id: &str,
    item_name: &str,
    column_values: Option<&Value>,
) -> GraphQlQuery {
    GraphQlQuery::new(CREATE_ITEM)
        .variable("boardId", board_id)
        .variable("groupId", group_id)
        .variable("itemName", item_name)
        .optional_variable("columnValues", column_values.map(json_scalar))
}

/// Create a sub-item under a parent item
pub fn create_subitem(
    parent_item_id: &str,
    item_name: &str,
    column_values: Option<&Value>,
) -> GraphQlQuery {
    GraphQlQuery::new(CREATE_SUBITEM)
        .variable("parentItemId", parent_item_id)
        .variable("itemName", item_name)
        .optional_variable("columnValues", column_values.map(json_scalar))
}

/// Update several columns of an item at once
pub fn change_multiple_column_values(
    board_id: &str,
    item_id: &str,
    column_values: &Value,
) -> GraphQlQuery {
    GraphQlQuery::new(CHANGE_MULTIPLE_COLUMN_VALUES)
        .variable("boardId", board_id)
        .variable("itemId", item_id)
        .variable("columnValues", json_scalar(column_values))
}

/// Post an update (comment) on an item
pub fn create_update(item_id: &str, body: &str) -> GraphQlQuery {
    GraphQlQuery::new(CREATE_UPDATE)
        .variable("itemId", item_id)
        .variable("body", body)
}

/// Move an item to another group
pub fn move_item_to_group(item_id: &str, group_id: &str) -> GraphQlQuery {
    GraphQlQuery::new(MOVE_ITEM_TO_GROUP)
        .variable("itemId", item_id)
        .variable("groupId", group_id)
}

/// Delete an item
pub fn delete_item(item_id: &str) -> GraphQlQuery {
    GraphQlQuery::new(DELETE_ITEM).variable("itemId", item_id)
}

/// Archive an item
pub fn archive_item(item_id: &str) -> GraphQlQuery {
    GraphQlQuery::new(ARCHIVE_ITEM).variable("itemId", item_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cursor_omits_group_filter() {
        let query = items_in_groups("123", &["topics", "done"], 25, Some("abc=="));

        let vars = query.variables();
        assert_eq!(vars.get("cursor"), Some(&json!("abc==")));
        assert_eq!(vars.get("limit"), Some(&json!(25)));
        assert_eq!(vars.get("boardIds"), Some(&json!(["123"])));
        assert!(vars.get("queryParams").is_none());
        assert_eq!(vars.len(), 3);
        assert!(!query.document().contains("query_params"));
    }

    #[test]
    fn test_group_filter_references_exactly_supplied_ids() {
        let query = items_in_groups("123", &["topics", "new_group"], 100, None);

        let vars = query.variables();
        assert!(vars.get("cursor").is_none());
        assert_eq!(
            vars.get("queryParams"),
            Some(&json!({
                "rules": [{
                    "column_id": "group",
                    "compare_value": ["topics", "new_group"],
                    "operator": "any_of"
                }]
            }))
        );
        assert_eq!(vars.get("limit"), Some(&json!(100)));
    }

    #[test]
    fn test_no_groups_and_no_cursor_sends_unfiltered_page() {
        let query = items_in_groups::<&str>("123", &[], 10, None);

        let vars = query.variables();
        assert!(vars.get("cursor").is_none());
        assert!(vars.get("queryParams").is_none());
        assert_eq!(vars.get("limit"), Some(&json!(10)));
    }

    #[test]
    fn test_identifiers_never_reach_document_text() {
        let hostile = r#"1) { id } } mutation { delete_item(item_id: 2"#;
        let query = items_in_groups(hostile, &[hostile], 5, None);
        assert!(!query.document().contains(hostile));

        let query = create_update(hostile, hostile);
        assert!(!query.document().contains(hostile));
        assert_eq!(query.variables().get("body"), Some(&json!(hostile)));
    }

    #[test]
    fn test_column_values_sent_as_json_string() {
        let values = json!({"status": {"label": "Done"}});
        let query = change_multiple_column_values("1", "2", &values);
        assert_eq!(
            query.variables().get("columnValues"),
            Some(&json!(r#"{"status":{"label":"Done"}}"#))
        );

        let query = create_item("1", "topics", "Task", None);
        assert!(query.variables().get("columnValues").is_none());
    }

    #[test]
    fn test_serializes_as_request_body() {
        let body = serde_json::to_value(delete_item("42")).unwrap();
        assert_eq!(body["variables"], json!({"itemId": "42"}));
        assert!(body["query"].as_str().unwrap().contains("delete_item"));
    }
}
