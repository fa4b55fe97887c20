mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_exchange_short_link_success() {
    let state = common::create_test_state();
    common::insert_link(&state, "x.link", "abc123", "link=https%3A%2F%2Fexample.com", false).await;
    let server = common::test_server(state);

    let response = server
        .post("/exchangeShortLink")
        .json(&json!({ "requestedLink": "https://x.link/abc123" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["longLink"],
        "https://x.link/abc123?link=https%3A%2F%2Fexample.com"
    );
}

#[tokio::test]
async fn test_exchange_preview_host() {
    let state = common::create_test_state();
    common::insert_link(&state, "x.link", "abc123", "link=https%3A%2F%2Fexample.com", false).await;
    let server = common::test_server(state);

    let response = server
        .post("/exchangeShortLink")
        .json(&json!({ "requestedLink": "https://preview.x.link/abc123" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["longLink"],
        "https://preview.x.link/abc123?link=https%3A%2F%2Fexample.com"
    );
}

#[tokio::test]
async fn test_exchange_label_preview_host() {
    let state = common::create_test_state();
    common::insert_link(&state, "app.x.link", "abc123", "link=x", true).await;
    let server = common::test_server(state);

    let response = server
        .post("/exchangeShortLink")
        .json(&json!({ "requestedLink": "https://app-preview.x.link/abc123" }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_exchange_not_found() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/exchangeShortLink")
        .json(&json!({ "requestedLink": "https://x.link/missing" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["kind"], "NOT_FOUND");
}

#[tokio::test]
async fn test_exchange_invalid_path_format() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/exchangeShortLink")
        .json(&json!({ "requestedLink": "https://x.link/a/b" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["details"]["kind"],
        "INVALID_PATH_FORMAT"
    );
}

#[tokio::test]
async fn test_exchange_unparsable_link() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/exchangeShortLink")
        .json(&json!({ "requestedLink": "not a link" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["details"]["kind"],
        "INVALID_REQUESTED_LINK"
    );
}

#[tokio::test]
async fn test_exchange_missing_requested_link() {
    let server = common::test_server(common::create_test_state());

    let response = server.post("/exchangeShortLink").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["fields"]["requested_link"].is_array());
}
