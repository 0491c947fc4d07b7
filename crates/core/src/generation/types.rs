//! Core generation data types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::media::MediaError;
use crate::provider::ProviderError;

/// Errors that can occur while running a generation attempt.
///
/// All variants are terminal for the current attempt; the core never
/// retries on its own.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API credential is selected and the selection flow could not
    /// provide one.
    #[error("API key not found. Please select a key.")]
    CredentialMissing,

    /// The provider rejected the request outright.
    #[error("generation request rejected: {0}")]
    SubmissionRejected(String),

    /// The job reached a terminal Failed status. Displays the provider's
    /// reason text verbatim.
    #[error("{0}")]
    GenerationFailed(String),

    /// The job succeeded but the provider returned no retrievable result.
    /// A provider contract violation, not a user error.
    #[error("no video returned from generation")]
    ResultMissing,

    /// Fetching the result bytes failed at the transport level.
    #[error("failed to download video bytes: {0}")]
    DownloadFailed(String),

    /// Transport failure while polling. Terminal for this attempt, but kept
    /// as its own variant so callers can classify it as retryable.
    #[error("provider error while polling: {0}")]
    Provider(#[from] ProviderError),

    /// Storing the downloaded bytes failed.
    #[error("failed to store video bytes: {0}")]
    Media(#[from] MediaError),
}

impl GenerationError {
    /// Returns the error kind as a metrics label.
    pub fn metric_label(&self) -> &'static str {
        match self {
            GenerationError::CredentialMissing => "credential_missing",
            GenerationError::SubmissionRejected(_) => "submission_rejected",
            GenerationError::GenerationFailed(_) => "generation_failed",
            GenerationError::ResultMissing => "result_missing",
            GenerationError::DownloadFailed(_) => "download_failed",
            GenerationError::Provider(_) => "provider_error",
            GenerationError::Media(_) => "media_error",
        }
    }
}

/// Aspect ratio of a video.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AspectRatio {
    /// Landscape (16:9).
    #[default]
    #[serde(rename = "16:9")]
    Wide,
    /// Portrait (9:16).
    #[serde(rename = "9:16")]
    Tall,
}

impl AspectRatio {
    /// Returns the ratio in the provider's wire format.
    pub fn as_keyword(&self) -> &'static str {
        match self {
            AspectRatio::Wide => "16:9",
            AspectRatio::Tall => "9:16",
        }
    }
}

/// Output resolution of a generated video.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Resolution {
    /// 720p (1280x720).
    #[default]
    #[serde(rename = "720p")]
    R720p,
    /// 1080p (1920x1080).
    #[serde(rename = "1080p")]
    R1080p,
}

impl Resolution {
    /// Returns the resolution in the provider's wire format.
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Resolution::R720p => "720p",
            Resolution::R1080p => "1080p",
        }
    }
}

/// One video generation request. Immutable once submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    /// Freeform prompt text (non-empty; callers guard before submitting).
    pub prompt: String,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub resolution: Resolution,
}

impl GenerationRequest {
    /// Create a request with default aspect ratio and resolution.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            aspect_ratio: AspectRatio::default(),
            resolution: Resolution::default(),
        }
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }
}

/// Status of one in-flight or completed generation job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Accepted by the provider, not yet polled.
    Submitted,
    /// At least one poll has been issued; job not yet terminal.
    Polling,
    /// Terminal success; a result locator is available.
    Succeeded,
    /// Terminal failure; a reason is available.
    Failed,
}

impl JobStatus {
    /// Returns true once no further polling occurs.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Succeeded | JobStatus::Failed)
    }
}

/// One remote generation attempt, exclusively owned by the orchestrator
/// invocation that created it.
///
/// Invariant: once terminal, exactly one of `result_locator` and
/// `failure_reason` is populated; never both. The mutating methods below
/// are the only way state changes, which is what upholds it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationJob {
    /// Opaque handle assigned by the remote provider.
    pub id: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_locator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl GenerationJob {
    /// Create a job that was just accepted by the provider.
    pub fn submitted(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: JobStatus::Submitted,
            result_locator: None,
            failure_reason: None,
        }
    }

    /// Record that a poll cycle has run without reaching a terminal status.
    pub fn mark_polling(&mut self) {
        if !self.status.is_terminal() {
            self.status = JobStatus::Polling;
        }
    }

    /// Transition to `Succeeded` with the result locator.
    pub fn succeed(&mut self, locator: impl Into<String>) {
        self.status = JobStatus::Succeeded;
        self.result_locator = Some(locator.into());
        self.failure_reason = None;
    }

    /// Transition to `Failed` with the provider's reason.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.status = JobStatus::Failed;
        self.failure_reason = Some(reason.into());
        self.result_locator = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitted_job_is_not_terminal() {
        let job = GenerationJob::submitted("op-123");
        assert_eq!(job.id, "op-123");
        assert_eq!(job.status, JobStatus::Submitted);
        assert!(!job.status.is_terminal());
        assert!(job.result_locator.is_none());
        assert!(job.failure_reason.is_none());
    }

    #[test]
    fn test_succeed_populates_only_locator() {
        let mut job = GenerationJob::submitted("op-1");
        job.mark_polling();
        assert_eq!(job.status, JobStatus::Polling);

        job.succeed("https://dl.example/video.mp4");
        assert_eq!(job.status, JobStatus::Succeeded);
        assert!(job.status.is_terminal());
        assert_eq!(
            job.result_locator.as_deref(),
            Some("https://dl.example/video.mp4")
        );
        assert!(job.failure_reason.is_none());
    }

    #[test]
    fn test_fail_populates_only_reason() {
        let mut job = GenerationJob::submitted("op-2");
        job.fail("quota exceeded");
        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.failure_reason.as_deref(), Some("quota exceeded"));
        assert!(job.result_locator.is_none());
    }

    #[test]
    fn test_mark_polling_does_not_regress_terminal() {
        let mut job = GenerationJob::submitted("op-3");
        job.succeed("uri");
        job.mark_polling();
        assert_eq!(job.status, JobStatus::Succeeded);
    }

    #[test]
    fn test_terminal_invariant_after_flip() {
        // A job that fails after a bogus success must not keep both fields.
        let mut job = GenerationJob::submitted("op-4");
        job.succeed("uri");
        job.fail("provider recalled the result");
        assert!(job.result_locator.is_none());
        assert!(job.failure_reason.is_some());
    }

    #[test]
    fn test_aspect_ratio_serialization() {
        assert_eq!(serde_json::to_string(&AspectRatio::Wide).unwrap(), r#""16:9""#);
        assert_eq!(serde_json::to_string(&AspectRatio::Tall).unwrap(), r#""9:16""#);
        let parsed: AspectRatio = serde_json::from_str(r#""9:16""#).unwrap();
        assert_eq!(parsed, AspectRatio::Tall);
    }

    #[test]
    fn test_resolution_keywords() {
        assert_eq!(Resolution::R720p.as_keyword(), "720p");
        assert_eq!(Resolution::R1080p.as_keyword(), "1080p");
    }

    #[test]
    fn test_request_builders() {
        let request = GenerationRequest::new("a cat")
            .with_aspect_ratio(AspectRatio::Tall)
            .with_resolution(Resolution::R1080p);
        assert_eq!(request.prompt, "a cat");
        assert_eq!(request.aspect_ratio, AspectRatio::Tall);
        assert_eq!(request.resolution, Resolution::R1080p);
    }

    #[test]
    fn test_generation_failed_displays_reason_verbatim() {
        let err = GenerationError::GenerationFailed("quota exceeded".to_string());
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn test_error_metric_labels() {
        assert_eq!(
            GenerationError::CredentialMissing.metric_label(),
            "credential_missing"
        );
        assert_eq!(GenerationError::ResultMissing.metric_label(), "result_missing");
    }
}
