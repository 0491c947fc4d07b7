//! Common test utilities for E2E testing with mocks.
//!
//! Provides an in-process router with mock provider and key source
//! injected, so the full HTTP surface can be exercised without a real
//! generation backend.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use vidarium_core::{
    gallery::{GalleryStore, MemoryGalleryStore, UploadImporter},
    generation::GenerationOrchestrator,
    media::{FsMediaStore, MediaStore},
    testing::MockGenerationProvider,
    Config, KeyProvider,
};
use vidarium_server::api::create_router;
use vidarium_server::state::AppState;

/// Re-export fixtures and mocks for test convenience
pub use vidarium_core::testing::{fixtures, MockKeyProvider};

/// Test fixture for E2E testing with mock dependencies.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock provider - script submit/poll/fetch behavior
    pub provider: Arc<MockGenerationProvider>,
    /// Mock key source - control credential availability
    pub keys: Arc<MockKeyProvider>,
    /// Gallery store shared with the router
    pub gallery: Arc<dyn GalleryStore>,
    /// Temporary directory backing the media store
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with a key already selected.
    pub async fn new() -> Self {
        Self::with_keys(Arc::new(MockKeyProvider::with_key("test-key"))).await
    }

    /// Create a test fixture with a custom key source.
    pub async fn with_keys(keys: Arc<MockKeyProvider>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let media_root = temp_dir.path().join("media");

        let mut config = Config::default();
        config.media.root = media_root.clone();
        // Fast polling so lifecycle tests finish quickly
        config.generation.poll_interval_ms = 20;

        let provider = Arc::new(MockGenerationProvider::new());

        let media_store = FsMediaStore::create(&media_root)
            .await
            .expect("Failed to create media store");
        let media: Arc<dyn MediaStore> = Arc::new(media_store);

        let gallery: Arc<dyn GalleryStore> = Arc::new(MemoryGalleryStore::new());
        let importer = UploadImporter::new(Arc::clone(&media));
        let orchestrator = GenerationOrchestrator::new(
            config.generation.clone(),
            Arc::clone(&provider) as Arc<dyn vidarium_core::provider::GenerationProvider>,
            Arc::clone(&keys) as Arc<dyn KeyProvider>,
            Arc::clone(&media),
        );

        let state = Arc::new(AppState::new(
            config,
            Arc::clone(&gallery),
            media_root,
            importer,
            orchestrator,
        ));

        Self {
            router: create_router(state),
            provider,
            keys,
            gallery,
            temp_dir,
        }
    }

    /// Issue a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Issue a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Issue a POST request with no body.
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Issue a multipart file upload.
    pub async fn upload(&self, path: &str, file_name: &str, content: &[u8]) -> TestResponse {
        let boundary = "vidarium-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{file_name}\"\r\nContent-Type: video/mp4\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).to_string(),
            ))
        };

        TestResponse { status, body }
    }
}
