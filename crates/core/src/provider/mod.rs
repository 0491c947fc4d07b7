//! Remote video generation provider abstraction.
//!
//! The provider exposes a long-running-operation API: `submit` starts a
//! job, `poll` refreshes its status, and `fetch` retrieves the bytes of a
//! finished result. The orchestrator only talks to this trait; `VeoClient`
//! is the concrete HTTP implementation.

mod types;
mod veo;

pub use types::{GeneratedVideo, JobHandle, ProviderError};
pub use veo::{VeoClient, VeoConfig};

use async_trait::async_trait;
use bytes::Bytes;

use crate::generation::GenerationRequest;

/// A remote long-running video generation provider.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Returns the name of this provider implementation.
    fn name(&self) -> &str;

    /// Submit a generation request, producing a job handle.
    async fn submit(&self, request: &GenerationRequest) -> Result<JobHandle, ProviderError>;

    /// Query the current status of a previously submitted job.
    /// Returns a refreshed handle; the input handle is not mutated.
    async fn poll(&self, handle: &JobHandle) -> Result<JobHandle, ProviderError>;

    /// Download the raw bytes behind a result URI, appending whatever
    /// credential the endpoint requires.
    async fn fetch(&self, uri: &str) -> Result<Bytes, ProviderError>;
}
