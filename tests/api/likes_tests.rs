//! Comment Like API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_like_from_another_user_is_counted() {
    let app = TestApp::new();
    let (_, author) = app.register_and_login("alice").await;
    let (_, fan) = app.register_and_login("bob").await;
    let thread_id = app.create_thread(&author).await;
    let comment_id = app.create_comment(&author, &thread_id).await;

    let response = app
        .put(
            &format!("/threads/{}/comments/{}/likes", thread_id, comment_id),
            Some(&fan),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "success" }));

    let detail = app.get(&format!("/threads/{}", thread_id)).await;
    let comment = &detail.body["data"]["thread"]["comments"][0];
    assert_eq!(comment["likeCount"], 1);
    assert_eq!(comment["replies"], json!([]));
}

#[tokio::test]
async fn test_second_toggle_unlikes() {
    let app = TestApp::new();
    let (user_id, token) = app.register_and_login("dicoding").await;
    let thread_id = app.create_thread(&token).await;
    let comment_id = app.create_comment(&token, &thread_id).await;
    let uri = format!("/threads/{}/comments/{}/likes", thread_id, comment_id);

    app.put(&uri, Some(&token)).await;
    assert_eq!(app.forum.like_rows(&comment_id, &user_id), 1);

    app.put(&uri, Some(&token)).await;
    assert_eq!(app.forum.like_rows(&comment_id, &user_id), 0);

    let detail = app.get(&format!("/threads/{}", thread_id)).await;
    assert_eq!(detail.body["data"]["thread"]["comments"][0]["likeCount"], 0);
}

#[tokio::test]
async fn test_like_unknown_comment_is_not_found() {
    let app = TestApp::new();
    let (_, token) = app.register_and_login("dicoding").await;
    let thread_id = app.create_thread(&token).await;

    let response = app
        .put(
            &format!("/threads/{}/comments/comment-missing/likes", thread_id),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_like_without_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .put("/threads/thread-1/comments/comment-1/likes", None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
