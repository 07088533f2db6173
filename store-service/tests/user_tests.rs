mod common;

use common::TestApp;
use reqwest::StatusCode;

#[tokio::test]
async fn test_list_users_requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_is_sanitized() {
    let app = TestApp::spawn().await;
    let token = app
        .register_and_login("alice", "alice@x.com", "Passw0rd")
        .await;

    let response = app
        .get("/api/users")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let text = response.text().await.expect("Failed to read response");
    let body: serde_json::Value = serde_json::from_str(&text).expect("Failed to parse response");

    assert_eq!(body["count"], 1);
    assert_eq!(body["users"][0]["username"], "alice");
    assert!(!text.contains("password"));
    assert!(!text.contains("$argon2"));
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = TestApp::spawn().await;
    let token = app
        .register_and_login("alice", "alice@x.com", "Passw0rd")
        .await;

    let response = app
        .get("/api/users/1")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["email"], "alice@x.com");
}

#[tokio::test]
async fn test_get_user_rejects_non_numeric_id() {
    let app = TestApp::spawn().await;
    let token = app
        .register_and_login("alice", "alice@x.com", "Passw0rd")
        .await;

    let response = app
        .get("/api/users/abc")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"], "User ID must be a number");
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app
        .register_and_login("alice", "alice@x.com", "Passw0rd")
        .await;

    let response = app
        .get("/api/users/999")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].as_str().unwrap().contains("does not exist"));
}
