//! Mock generation provider for testing.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::generation::GenerationRequest;
use crate::provider::{GenerationProvider, JobHandle, ProviderError};

/// Mock implementation of the GenerationProvider trait.
///
/// Provides controllable behavior for testing:
/// - Track submitted requests and fetched uris for assertions
/// - Script the sequence of poll responses
/// - Simulate failures at each lifecycle step
///
/// # Example
///
/// ```rust,ignore
/// let provider = MockGenerationProvider::new();
/// provider.set_submit_result(fixtures::pending_handle("op-1")).await;
/// provider
///     .push_poll_response(fixtures::succeeded_handle("op-1", "mem://v.mp4"))
///     .await;
/// provider
///     .set_fetch_data("mem://v.mp4", Bytes::from_static(b"bytes"))
///     .await;
/// ```
pub struct MockGenerationProvider {
    /// Handle returned by the next submit call.
    submit_result: Arc<RwLock<Option<JobHandle>>>,
    /// If set, the next submit fails with this error (consumed on use).
    submit_error: Arc<RwLock<Option<ProviderError>>>,
    /// Scripted poll responses, consumed front to back. When empty, polls
    /// answer with a pending copy of the polled handle.
    poll_responses: Arc<RwLock<VecDeque<JobHandle>>>,
    /// If set, the next poll fails with this error (consumed on use).
    poll_error: Arc<RwLock<Option<ProviderError>>>,
    /// Bytes served by fetch, keyed by uri.
    fetch_data: Arc<RwLock<HashMap<String, Bytes>>>,
    /// If set, the next fetch fails with this error (consumed on use).
    fetch_error: Arc<RwLock<Option<ProviderError>>>,

    /// Recorded submit calls.
    submitted: Arc<RwLock<Vec<GenerationRequest>>>,
    /// Number of poll calls issued.
    poll_count: Arc<RwLock<usize>>,
    /// Recorded fetch uris.
    fetched: Arc<RwLock<Vec<String>>>,
}

impl Default for MockGenerationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerationProvider {
    pub fn new() -> Self {
        Self {
            submit_result: Arc::new(RwLock::new(None)),
            submit_error: Arc::new(RwLock::new(None)),
            poll_responses: Arc::new(RwLock::new(VecDeque::new())),
            poll_error: Arc::new(RwLock::new(None)),
            fetch_data: Arc::new(RwLock::new(HashMap::new())),
            fetch_error: Arc::new(RwLock::new(None)),
            submitted: Arc::new(RwLock::new(Vec::new())),
            poll_count: Arc::new(RwLock::new(0)),
            fetched: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Set the handle returned by subsequent submit calls.
    pub async fn set_submit_result(&self, handle: JobHandle) {
        *self.submit_result.write().await = Some(handle);
    }

    /// Fail the next submit call with the given error.
    pub async fn set_submit_error(&self, error: ProviderError) {
        *self.submit_error.write().await = Some(error);
    }

    /// Append a scripted poll response.
    pub async fn push_poll_response(&self, handle: JobHandle) {
        self.poll_responses.write().await.push_back(handle);
    }

    /// Fail the next poll call with the given error.
    pub async fn set_poll_error(&self, error: ProviderError) {
        *self.poll_error.write().await = Some(error);
    }

    /// Serve bytes for the given uri from fetch.
    pub async fn set_fetch_data(&self, uri: impl Into<String>, bytes: Bytes) {
        self.fetch_data.write().await.insert(uri.into(), bytes);
    }

    /// Fail the next fetch call with the given error.
    pub async fn set_fetch_error(&self, error: ProviderError) {
        *self.fetch_error.write().await = Some(error);
    }

    /// All recorded submit calls.
    pub async fn submitted_requests(&self) -> Vec<GenerationRequest> {
        self.submitted.read().await.clone()
    }

    /// Number of poll calls issued so far.
    pub async fn poll_count(&self) -> usize {
        *self.poll_count.read().await
    }

    /// All recorded fetch uris.
    pub async fn fetched_uris(&self) -> Vec<String> {
        self.fetched.read().await.clone()
    }
}

#[async_trait]
impl GenerationProvider for MockGenerationProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn submit(&self, request: &GenerationRequest) -> Result<JobHandle, ProviderError> {
        self.submitted.write().await.push(request.clone());

        if let Some(error) = self.submit_error.write().await.take() {
            return Err(error);
        }

        match self.submit_result.read().await.clone() {
            Some(handle) => Ok(handle),
            None => Ok(JobHandle::pending("mock-operation")),
        }
    }

    async fn poll(&self, handle: &JobHandle) -> Result<JobHandle, ProviderError> {
        *self.poll_count.write().await += 1;

        if let Some(error) = self.poll_error.write().await.take() {
            return Err(error);
        }

        match self.poll_responses.write().await.pop_front() {
            Some(next) => Ok(next),
            None => Ok(JobHandle::pending(&handle.id)),
        }
    }

    async fn fetch(&self, uri: &str) -> Result<Bytes, ProviderError> {
        self.fetched.write().await.push(uri.to_string());

        if let Some(error) = self.fetch_error.write().await.take() {
            return Err(error);
        }

        self.fetch_data
            .read()
            .await
            .get(uri)
            .cloned()
            .ok_or_else(|| ProviderError::Api {
                status: 404,
                message: "Not Found".to_string(),
            })
    }
}
