//! Types for the remote generation provider.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the remote generation provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider is missing required configuration (URL, key, model).
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// Transport-level failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the provider API.
    #[error("provider API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("failed to parse provider response: {0}")]
    Parse(String),
}

/// Opaque handle to a remote long-running generation operation.
///
/// Returned by `submit` and refreshed by each `poll`; the orchestrator
/// never inspects anything beyond the fields here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobHandle {
    /// Provider-assigned operation name.
    pub id: String,
    /// True once the operation reached a terminal status.
    #[serde(default)]
    pub done: bool,
    /// Failure reason, set only when the operation failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Generated entries, set only when the operation succeeded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<GeneratedVideo>,
}

impl JobHandle {
    /// Handle for an operation that is still running.
    pub fn pending(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            done: false,
            error: None,
            results: Vec::new(),
        }
    }

    /// Returns true when the operation finished without a provider error.
    pub fn is_success(&self) -> bool {
        self.done && self.error.is_none()
    }
}

/// One generated video entry in a finished operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedVideo {
    /// Download URI for the raw bytes, if the provider returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}
