//! Testing utilities and mock implementations for E2E tests.
//!
//! This module provides mock implementations of the external service
//! traits, allowing full lifecycle testing without a real provider or
//! filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use vidarium_core::testing::{fixtures, MockGenerationProvider, MockKeyProvider};
//!
//! let provider = MockGenerationProvider::new();
//! let keys = MockKeyProvider::with_key("test-key");
//!
//! provider.set_submit_result(fixtures::pending_handle("op-1")).await;
//! provider
//!     .push_poll_response(fixtures::succeeded_handle("op-1", "mem://v.mp4"))
//!     .await;
//!
//! // Use in a GenerationOrchestrator...
//! ```

mod memory_media;
mod mock_key;
mod mock_provider;

pub use memory_media::MemoryMediaStore;
pub use mock_key::MockKeyProvider;
pub use mock_provider::MockGenerationProvider;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::generation::GenerationRequest;
    use crate::provider::{GeneratedVideo, JobHandle};

    /// Create a generation request with default aspect ratio and resolution.
    pub fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest::new(prompt)
    }

    /// Handle for an operation that is still running.
    pub fn pending_handle(id: &str) -> JobHandle {
        JobHandle::pending(id)
    }

    /// Handle for an operation that finished with one downloadable video.
    pub fn succeeded_handle(id: &str, uri: &str) -> JobHandle {
        JobHandle {
            id: id.to_string(),
            done: true,
            error: None,
            results: vec![GeneratedVideo {
                uri: Some(uri.to_string()),
            }],
        }
    }

    /// Handle for an operation that finished with a provider error.
    pub fn failed_handle(id: &str, reason: &str) -> JobHandle {
        JobHandle {
            id: id.to_string(),
            done: true,
            error: Some(reason.to_string()),
            results: Vec::new(),
        }
    }

    /// Handle for an operation that succeeded but returned no results.
    pub fn empty_success_handle(id: &str) -> JobHandle {
        JobHandle {
            id: id.to_string(),
            done: true,
            error: None,
            results: Vec::new(),
        }
    }

    /// Handle whose single result entry carries no uri.
    pub fn handle_with_blank_result(id: &str) -> JobHandle {
        JobHandle {
            id: id.to_string(),
            done: true,
            error: None,
            results: vec![GeneratedVideo { uri: None }],
        }
    }
}
