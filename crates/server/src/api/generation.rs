//! Generation API handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use vidarium_core::{
    generation::{GenerationRequest, MSG_CHECKING_KEY},
    status::{GenerationPhase, ProgressUpdate},
    AspectRatio, Resolution,
};

use crate::state::AppState;

/// Request body for starting a generation.
#[derive(Debug, Deserialize)]
pub struct StartGenerationBody {
    pub prompt: String,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub resolution: Resolution,
}

#[derive(Debug, Serialize)]
pub struct StartGenerationResponse {
    pub status: String,
}

/// Snapshot of the current generation state.
#[derive(Debug, Serialize)]
pub struct GenerationStatusResponse {
    pub phase: GenerationPhase,
    pub message: Option<String>,
    pub error: Option<String>,
    pub last_artifact: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// POST /api/v1/generations
///
/// Starts a generation attempt in the background. One attempt at a time:
/// a second request while one is running gets 409.
pub async fn start_generation(
    State(state): State<Arc<AppState>>,
    Json(body): Json<StartGenerationBody>,
) -> Result<(StatusCode, Json<StartGenerationResponse>), ApiError> {
    // Empty prompts never reach the provider.
    if body.prompt.trim().is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "prompt must not be empty"));
    }

    {
        let mut generation = state
            .generation()
            .write()
            .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "state lock poisoned"))?;
        if generation.projector.phase().is_busy() {
            return Err(api_error(
                StatusCode::CONFLICT,
                "a generation is already in progress",
            ));
        }
        // Claim the slot before the task starts so a racing request sees busy.
        generation.projector.reset();
        generation
            .projector
            .observe(&ProgressUpdate::validating_key(MSG_CHECKING_KEY));
    }

    let request = GenerationRequest::new(body.prompt)
        .with_aspect_ratio(body.aspect_ratio)
        .with_resolution(body.resolution);

    info!("Starting generation for prompt ({} chars)", request.prompt.len());

    let task_state = Arc::clone(&state);
    tokio::spawn(async move {
        let progress_state = Arc::clone(&task_state);
        let result = task_state
            .orchestrator()
            .run(request, move |update| {
                if let Ok(mut generation) = progress_state.generation().write() {
                    generation.projector.observe(&update);
                }
            })
            .await;

        match result {
            Ok(artifact) => {
                let artifact_id = artifact.id.clone();
                task_state.gallery().add(artifact).await;
                if let Ok(mut generation) = task_state.generation().write() {
                    generation.projector.complete("Video ready");
                    generation.last_artifact = Some(artifact_id);
                }
            }
            Err(e) => {
                warn!("Generation failed: {}", e);
                if let Ok(mut generation) = task_state.generation().write() {
                    generation.projector.fail(e.to_string());
                }
            }
        }
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(StartGenerationResponse {
            status: "started".to_string(),
        }),
    ))
}

/// GET /api/v1/generations/status
pub async fn generation_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GenerationStatusResponse>, ApiError> {
    let generation = state
        .generation()
        .read()
        .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "state lock poisoned"))?;

    Ok(Json(GenerationStatusResponse {
        phase: generation.projector.phase(),
        message: generation.projector.message().map(str::to_string),
        error: generation.projector.error().map(str::to_string),
        last_artifact: generation.last_artifact.clone(),
    }))
}

/// POST /api/v1/generations/reset
///
/// Clears a terminal state back to idle so the UI can start fresh.
pub async fn reset_generation(
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    let mut generation = state
        .generation()
        .write()
        .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "state lock poisoned"))?;

    if generation.projector.phase().is_busy() {
        return Err(api_error(
            StatusCode::CONFLICT,
            "cannot reset while a generation is in progress",
        ));
    }

    generation.projector.reset();
    generation.last_artifact = None;
    Ok(StatusCode::NO_CONTENT)
}
