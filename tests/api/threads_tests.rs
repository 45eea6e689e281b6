//! Thread API Tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_post_thread_returns_added_thread() {
    let app = TestApp::new();
    let (user_id, token) = app.register_and_login("dicoding").await;

    let response = app
        .post(
            "/threads",
            json!({ "title": "sebuah thread", "body": "sebuah body thread" }),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let added = &response.body["data"]["addedThread"];
    assert!(added["id"].as_str().unwrap().starts_with("thread-"));
    assert_eq!(added["title"], "sebuah thread");
    assert_eq!(added["owner"], user_id.as_str());
}

#[tokio::test]
async fn test_post_thread_without_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .post("/threads", json!({ "title": "t", "body": "b" }), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["status"], "fail");
}

#[tokio::test]
async fn test_post_thread_with_invalid_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .post(
            "/threads",
            json!({ "title": "t", "body": "b" }),
            Some("not.a.token"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_post_thread_missing_property_fails() {
    let app = TestApp::new();
    let (_, token) = app.register_and_login("dicoding").await;

    let response = app
        .post("/threads", json!({ "title": "sebuah thread" }), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({
            "status": "fail",
            "message": "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada"
        })
    );
}

#[tokio::test]
async fn test_post_thread_wrong_type_fails() {
    let app = TestApp::new();
    let (_, token) = app.register_and_login("dicoding").await;

    let response = app
        .post(
            "/threads",
            json!({ "title": 123, "body": "sebuah body" }),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "tidak dapat membuat thread baru karena tipe data tidak sesuai"
    );
}

#[tokio::test]
async fn test_post_thread_malformed_json_fails() {
    let app = TestApp::new();
    let (_, token) = app.register_and_login("dicoding").await;

    let (status, _) = app
        .send_raw(
            Method::POST,
            "/threads",
            Some("{not json".to_string()),
            Some(&token),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_thread_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/threads/thread-missing").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({ "status": "fail", "message": "Thread tidak ditemukan" })
    );
}

#[tokio::test]
async fn test_get_thread_detail_is_assembled_in_order() {
    let app = TestApp::new();
    let (_, alice) = app.register_and_login("alice").await;
    let (_, bob) = app.register_and_login("bob").await;

    let thread_id = app.create_thread(&alice).await;
    let first = app.create_comment(&alice, &thread_id).await;
    let second = app.create_comment(&bob, &thread_id).await;
    let reply = app.create_reply(&bob, &thread_id, &first).await;

    let response = app.get(&format!("/threads/{}", thread_id)).await;

    assert_eq!(response.status, StatusCode::OK);
    let thread = &response.body["data"]["thread"];
    assert_eq!(thread["id"], thread_id.as_str());
    assert_eq!(thread["title"], "sebuah thread");
    assert_eq!(thread["body"], "sebuah body thread");
    assert_eq!(thread["username"], "alice");
    assert!(thread["date"].is_string());

    let comments = thread["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["id"], first.as_str());
    assert_eq!(comments[0]["username"], "alice");
    assert_eq!(comments[0]["likeCount"], 0);
    assert_eq!(comments[0]["replies"][0]["id"], reply.as_str());
    assert_eq!(comments[0]["replies"][0]["username"], "bob");
    assert_eq!(comments[0]["replies"][0]["content"], "sebuah balasan");
    assert_eq!(comments[1]["id"], second.as_str());
    assert_eq!(comments[1]["replies"], json!([]));
}

#[tokio::test]
async fn test_get_thread_detail_is_idempotent() {
    let app = TestApp::new();
    let (_, token) = app.register_and_login("dicoding").await;
    let thread_id = app.create_thread(&token).await;
    app.create_comment(&token, &thread_id).await;

    let first = app.get(&format!("/threads/{}", thread_id)).await;
    let second = app.get(&format!("/threads/{}", thread_id)).await;

    assert_eq!(first.body, second.body);
}
