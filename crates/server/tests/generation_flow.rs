//! Generation endpoint tests: start, status polling, reset, conflicts.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use bytes::Bytes;
use serde_json::json;

use common::{fixtures, TestFixture};

/// Poll the status endpoint until it leaves the busy phases.
async fn wait_for_terminal(fixture: &TestFixture) -> serde_json::Value {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let response = fixture.get("/api/v1/generations/status").await;
            let phase = response.body["phase"].as_str().unwrap().to_string();
            if phase == "completed" || phase == "error" {
                return response.body;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("generation did not reach a terminal phase")
}

#[tokio::test]
async fn test_generation_happy_path() {
    let fixture = TestFixture::new().await;
    fixture
        .provider
        .set_submit_result(fixtures::pending_handle("operations/op-1"))
        .await;
    fixture
        .provider
        .push_poll_response(fixtures::succeeded_handle(
            "operations/op-1",
            "https://dl.example/v.mp4",
        ))
        .await;
    fixture
        .provider
        .set_fetch_data("https://dl.example/v.mp4", Bytes::from_static(b"video"))
        .await;

    let response = fixture
        .post("/api/v1/generations", json!({ "prompt": "a cat" }))
        .await;
    assert_eq!(response.status, StatusCode::ACCEPTED);

    let status = wait_for_terminal(&fixture).await;
    assert_eq!(status["phase"], "completed");
    assert_eq!(status["message"], "Video ready");
    assert!(status["error"].is_null());

    // The artifact landed in the gallery with the prompt as title
    let artifact_id = status["last_artifact"].as_str().unwrap();
    let video = fixture
        .get(&format!("/api/v1/videos/{}", artifact_id))
        .await;
    assert_eq!(video.status, StatusCode::OK);
    assert_eq!(video.body["title"], "a cat");
    assert_eq!(video.body["description"], "a cat");
    assert_eq!(video.body["is_generated"], true);
}

#[tokio::test]
async fn test_blank_prompt_is_rejected() {
    let fixture = TestFixture::new().await;

    let response = fixture
        .post("/api/v1/generations", json!({ "prompt": "   " }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    // Nothing was submitted and the projector never left idle
    assert!(fixture.provider.submitted_requests().await.is_empty());
    let status = fixture.get("/api/v1/generations/status").await;
    assert_eq!(status.body["phase"], "idle");
}

#[tokio::test]
async fn test_concurrent_generation_is_conflict() {
    let fixture = TestFixture::new().await;
    fixture
        .provider
        .set_submit_result(fixtures::pending_handle("operations/op-1"))
        .await;
    // No scripted poll responses: the first attempt stays busy

    let first = fixture
        .post("/api/v1/generations", json!({ "prompt": "first" }))
        .await;
    assert_eq!(first.status, StatusCode::ACCEPTED);

    let second = fixture
        .post("/api/v1/generations", json!({ "prompt": "second" }))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_missing_key_fails_with_credential_message() {
    let fixture =
        TestFixture::with_keys(std::sync::Arc::new(common::MockKeyProvider::new())).await;

    let response = fixture
        .post("/api/v1/generations", json!({ "prompt": "a cat" }))
        .await;
    assert_eq!(response.status, StatusCode::ACCEPTED);

    let status = wait_for_terminal(&fixture).await;
    assert_eq!(status["phase"], "error");
    assert_eq!(status["error"], "API key not found. Please select a key.");
}

#[tokio::test]
async fn test_provider_failure_reason_reaches_status() {
    let fixture = TestFixture::new().await;
    fixture
        .provider
        .set_submit_result(fixtures::pending_handle("operations/op-1"))
        .await;
    fixture
        .provider
        .push_poll_response(fixtures::failed_handle("operations/op-1", "quota exceeded"))
        .await;

    fixture
        .post("/api/v1/generations", json!({ "prompt": "a cat" }))
        .await;

    let status = wait_for_terminal(&fixture).await;
    assert_eq!(status["phase"], "error");
    assert_eq!(status["error"], "quota exceeded");
}

#[tokio::test]
async fn test_reset_returns_to_idle() {
    let fixture = TestFixture::new().await;
    fixture
        .provider
        .set_submit_result(fixtures::pending_handle("operations/op-1"))
        .await;
    fixture
        .provider
        .push_poll_response(fixtures::failed_handle("operations/op-1", "quota exceeded"))
        .await;

    fixture
        .post("/api/v1/generations", json!({ "prompt": "a cat" }))
        .await;
    wait_for_terminal(&fixture).await;

    let reset = fixture.post_empty("/api/v1/generations/reset").await;
    assert_eq!(reset.status, StatusCode::NO_CONTENT);

    let status = fixture.get("/api/v1/generations/status").await;
    assert_eq!(status.body["phase"], "idle");
    assert!(status.body["error"].is_null());
    assert!(status.body["last_artifact"].is_null());
}
