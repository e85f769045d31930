//! Cross-cutting validation: malformed arguments and unknown tools.

use pretty_assertions::assert_eq;
use rmcp::model::ErrorCode;
use serde_json::json;

use crate::common::builders::movies;
use crate::common::{args, create_test_server, tool_error, StubProvider};

#[tokio::test]
async fn test_wrong_argument_types_never_reach_provider() {
    let (server, stub) = create_test_server(StubProvider::new().with_movies(movies(1, 5)));

    let cases = [
        ("search_movies", json!({"query": 42})),
        ("search_movies", json!({"query": "Heat", "year": "nineteen ninety five"})),
        ("get_movie_details", json!({"movie_id": "27205"})),
        ("get_trending", json!({"time_window": 7})),
        ("get_recommendations", json!({"movie_id": 27205, "limit": "ten"})),
        ("discover_movies", json!({"min_rating": "high"})),
        ("search_person", json!({"query": ["nolan"]})),
        ("get_person_details", json!({"person_id": 1.5})),
    ];

    for (tool, arguments) in cases {
        let result = server
            .call_tool_by_name(tool, args(arguments))
            .await
            .unwrap();
        let error = tool_error(&result);
        assert_eq!(error["error_code"], "INVALID_INPUT", "{tool}");
        assert!(
            error["message"]
                .as_str()
                .unwrap()
                .starts_with(&format!("Invalid input for {tool}")),
            "{tool}: {error}"
        );
    }

    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_missing_required_arguments() {
    let (server, stub) = create_test_server(StubProvider::new());

    for tool in [
        "search_movies",
        "get_movie_details",
        "get_recommendations",
        "search_person",
        "get_person_details",
    ] {
        let result = server.call_tool_by_name(tool, None).await.unwrap();
        assert_eq!(tool_error(&result)["error_code"], "INVALID_INPUT", "{tool}");
    }

    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_tool_is_protocol_error() {
    let (server, stub) = create_test_server(StubProvider::new());

    let err = server
        .call_tool_by_name("get_tv_show", args(json!({"show_id": 1396})))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.message, "Unknown tool: get_tv_show");
    assert!(stub.calls().is_empty());
}
