//! Generation orchestrator implementation.
//!
//! Drives a request through the full lifecycle:
//! credential check, submission, polling until done, result download,
//! and materialization as a gallery artifact.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::credential::KeyProvider;
use crate::gallery::VideoArtifact;
use crate::media::MediaStore;
use crate::metrics::{GENERATION_ATTEMPTS, GENERATION_DURATION, POLL_CYCLES};
use crate::provider::{GenerationProvider, JobHandle, ProviderError};
use crate::status::ProgressUpdate;

use super::config::GenerationConfig;
use super::types::{GenerationError, GenerationJob, GenerationRequest};

const ARTIFACT_EXTENSION: &str = "mp4";
const TITLE_MAX_CHARS: usize = 30;

/// First status message of every attempt; callers that pre-claim a
/// progress slot show the same text.
pub const MSG_CHECKING_KEY: &str = "Checking API key...";
const MSG_INITIALIZING: &str = "Initializing generation...";
const MSG_DREAMING: &str = "Veo is dreaming... (this may take a minute)";
const MSG_DOWNLOADING: &str = "Downloading video stream...";

/// The generation orchestrator - runs one request end to end.
#[derive(Clone)]
pub struct GenerationOrchestrator {
    config: GenerationConfig,
    provider: Arc<dyn GenerationProvider>,
    keys: Arc<dyn KeyProvider>,
    media: Arc<dyn MediaStore>,
}

impl GenerationOrchestrator {
    pub fn new(
        config: GenerationConfig,
        provider: Arc<dyn GenerationProvider>,
        keys: Arc<dyn KeyProvider>,
        media: Arc<dyn MediaStore>,
    ) -> Self {
        Self {
            config,
            provider,
            keys,
            media,
        }
    }

    /// Run a generation request to completion.
    ///
    /// `on_progress` receives phase transitions and status messages as the
    /// job advances. The future runs the whole lifecycle; dropping it
    /// abandons the job without cancelling it on the provider side.
    pub async fn run(
        &self,
        request: GenerationRequest,
        on_progress: impl Fn(ProgressUpdate) + Send + Sync,
    ) -> Result<VideoArtifact, GenerationError> {
        let started = Instant::now();
        let result = self.run_inner(&request, &on_progress, started).await;

        let label = match &result {
            Ok(_) => "success",
            Err(e) => e.metric_label(),
        };
        GENERATION_ATTEMPTS.with_label_values(&[label]).inc();
        GENERATION_DURATION
            .with_label_values(&[label])
            .observe(started.elapsed().as_secs_f64());

        result
    }

    async fn run_inner(
        &self,
        request: &GenerationRequest,
        on_progress: &(impl Fn(ProgressUpdate) + Send + Sync),
        started: Instant,
    ) -> Result<VideoArtifact, GenerationError> {
        on_progress(ProgressUpdate::validating_key(MSG_CHECKING_KEY));
        self.ensure_key().await?;

        on_progress(ProgressUpdate::generating(MSG_INITIALIZING));
        let mut handle = self
            .provider
            .submit(request)
            .await
            .map_err(|e| GenerationError::SubmissionRejected(e.to_string()))?;
        let mut job = GenerationJob::submitted(&handle.id);
        info!(job_id = %job.id, provider = self.provider.name(), "generation job submitted");

        on_progress(ProgressUpdate::generating(MSG_DREAMING));
        let poll_interval = Duration::from_millis(self.config.poll_interval_ms);
        while !handle.done {
            tokio::time::sleep(poll_interval).await;
            handle = self.provider.poll(&handle).await?;
            job.mark_polling();
            POLL_CYCLES.inc();
            debug!(job_id = %job.id, done = handle.done, "polled generation job");
            on_progress(ProgressUpdate::generating(format!(
                "Rendering video... {}s elapsed",
                started.elapsed().as_secs()
            )));
        }

        if let Some(reason) = handle.error.clone() {
            job.fail(&reason);
            warn!(job_id = %job.id, reason, "generation job failed");
            return Err(GenerationError::GenerationFailed(reason));
        }

        let uri = resolve_result(&handle)?.to_string();
        job.succeed(&uri);

        on_progress(ProgressUpdate::generating(MSG_DOWNLOADING));
        let bytes = self.provider.fetch(&uri).await.map_err(|e| match e {
            ProviderError::Api { message, .. } => GenerationError::DownloadFailed(message),
            other => GenerationError::DownloadFailed(other.to_string()),
        })?;

        let artifact_id = Uuid::new_v4().to_string();
        let locator = self
            .media
            .put(&artifact_id, ARTIFACT_EXTENSION, bytes)
            .await?;
        info!(job_id = %job.id, artifact_id = %artifact_id, locator = %locator, "generation job completed");

        Ok(
            VideoArtifact::new(artifact_id, locator, title_from_prompt(&request.prompt))
                .with_description(request.prompt.clone())
                .with_aspect_ratio(request.aspect_ratio)
                .generated(),
        )
    }

    /// Make sure a key is available, triggering the selection flow once.
    ///
    /// Availability after the selector resolves is what counts; a selector
    /// that resolves without installing a key still fails the job.
    async fn ensure_key(&self) -> Result<(), GenerationError> {
        if self.keys.has_key().await {
            return Ok(());
        }
        self.keys
            .open_key_selector()
            .await
            .map_err(|_| GenerationError::CredentialMissing)?;
        if self.keys.has_key().await {
            Ok(())
        } else {
            Err(GenerationError::CredentialMissing)
        }
    }
}

/// First playable result of a finished job.
///
/// Read-only: calling it twice on the same handle yields the same uri.
pub fn resolve_result(handle: &JobHandle) -> Result<&str, GenerationError> {
    handle
        .results
        .first()
        .and_then(|video| video.uri.as_deref())
        .filter(|uri| !uri.is_empty())
        .ok_or(GenerationError::ResultMissing)
}

/// Gallery title derived from the prompt: the first 30 characters, with
/// an ellipsis only when something was cut.
fn title_from_prompt(prompt: &str) -> String {
    let mut title: String = prompt.chars().take(TITLE_MAX_CHARS).collect();
    if prompt.chars().count() > TITLE_MAX_CHARS {
        title.push_str("...");
    }
    title
}
