//! Integration tests driving the MCP server's dispatcher with the mock client

use monday_mcp::mcp::{BaseToolImpl, McpServer};
use monday_mcp::monday::mock::MockMondayClient;
use monday_mcp::test_utils::{arguments, expect_text, test_config};
use monday_mcp::MondayMcpError;
use serde_json::json;
use std::sync::Arc;

fn server(client: &MockMondayClient) -> McpServer {
    McpServer::with_client(Arc::new(client.clone()), Arc::new(test_config()))
}

#[tokio::test]
async fn test_browse_then_create_then_comment() {
    let client = MockMondayClient::new()
        .with_response(
            "fetch_boards",
            json!({"data": {"boards": [{"id": "555", "name": "Launch"}]}}),
        )
        .with_response(
            "get_groups_by_board",
            json!({"data": {"boards": [{"groups": [{"id": "topics", "title": "Topics"}]}]}}),
        )
        .with_response(
            "create_item",
            json!({"data": {"create_item": {"id": "9001"}}}),
        )
        .with_response(
            "create_update",
            json!({"data": {"create_update": {"id": "1"}}}),
        );
    let server = server(&client);

    let boards = server
        .dispatch("list-boards", arguments(json!({"limit": 1})))
        .await
        .unwrap();
    assert_eq!(
        expect_text(&boards, false),
        "Available Monday.com Boards:\n- Launch (ID: 555)"
    );

    let groups = server
        .dispatch("get-board-groups", arguments(json!({"boardId": "555"})))
        .await
        .unwrap();
    assert!(expect_text(&groups, false).contains(r#""id":"topics""#));

    let created = server
        .dispatch(
            "create-item",
            arguments(json!({"boardId": "555", "itemTitle": "Press kit", "groupId": "topics"})),
        )
        .await
        .unwrap();
    assert_eq!(
        expect_text(&created, false),
        "Created a new Monday.com item. URL: https://acme.monday.com/boards/555/pulses/9001"
    );

    let comment = server
        .dispatch(
            "create-update",
            arguments(json!({"itemId": "9001", "updateText": "Draft attached"})),
        )
        .await
        .unwrap();
    assert_eq!(
        expect_text(&comment, false),
        "Created new update on Monday.com item 9001: Draft attached"
    );

    let methods: Vec<&str> = client.calls().iter().map(|c| c.method).collect();
    assert_eq!(
        methods,
        vec!["fetch_boards", "get_groups_by_board", "create_item", "create_update"]
    );
}

#[tokio::test]
async fn test_paging_through_a_group() {
    let client = MockMondayClient::new().with_response(
        "execute",
        json!({"data": {"boards": [{"items_page": {"cursor": "next==", "items": [{"id": "1", "name": "A"}]}}]}}),
    );
    let server = server(&client);

    server
        .dispatch(
            "list-items-in-groups",
            arguments(json!({"boardId": "555", "groupIds": ["topics"], "limit": 1})),
        )
        .await
        .unwrap();
    server
        .dispatch(
            "list-items-in-groups",
            arguments(json!({
                "boardId": "555",
                "groupIds": ["topics"],
                "limit": 1,
                "cursor": "next=="
            })),
        )
        .await
        .unwrap();

    let calls = client.calls_to("execute");
    assert!(calls[0].arguments["variables"].get("queryParams").is_some());
    assert!(calls[0].arguments["variables"].get("cursor").is_none());
    assert!(calls[1].arguments["variables"].get("queryParams").is_none());
    assert_eq!(calls[1].arguments["variables"]["cursor"], "next==");
}

#[tokio::test]
async fn test_update_item_name_two_round_trips() {
    let client = MockMondayClient::new()
        .with_response(
            "execute",
            json!({"data": {"boards": [{"items_page": {"items": [
                {"id": "10", "name": "Alpha"},
                {"id": "11", "name": "McpTest"},
                {"id": "12", "name": "Beta"},
                {"id": "13", "name": "McpTest"}
            ]}}]}}),
        )
        .with_response(
            "change_multiple_column_values",
            json!({"data": {"change_multiple_column_values": {"id": "11"}}}),
        );

    let result = server(&client)
        .dispatch(
            "update-item-name",
            arguments(json!({
                "boardId": "555",
                "groupId": "topics",
                "itemName": "McpTest",
                "statusValue": "Done"
            })),
        )
        .await
        .unwrap();

    assert!(expect_text(&result, false).contains("(ID: 11)"));
    let methods: Vec<&str> = client.calls().iter().map(|c| c.method).collect();
    assert_eq!(methods, vec!["execute", "change_multiple_column_values"]);
}

#[tokio::test]
async fn test_call_shape_faults_are_raised() {
    let client = MockMondayClient::new();
    let server = server(&client);

    let err = server
        .dispatch("monday-create-item", serde_json::Map::new())
        .await
        .unwrap_err();
    assert!(matches!(err, MondayMcpError::UnknownTool(_)));
    assert!(err.is_call_fault());

    let err = server
        .dispatch("create-update", arguments(json!({"itemId": "1"})))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing required argument 'updateText' for tool 'create-update'"
    );

    let err = server
        .dispatch(
            "list-boards",
            arguments(json!({"limit": "many"})),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, MondayMcpError::InvalidArguments { .. }));

    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let client = MockMondayClient::new();
    let server = server(&client);

    let calls = (0..8).map(|i| {
        let server = server.clone();
        tokio::spawn(async move {
            server
                .dispatch("archive-item", arguments(json!({"itemId": i.to_string()})))
                .await
        })
    });

    for (i, handle) in calls.collect::<Vec<_>>().into_iter().enumerate() {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(
            BaseToolImpl::result_text(&result),
            format!("Archived item {i}.")
        );
    }
    assert_eq!(client.call_count(), 8);
}
