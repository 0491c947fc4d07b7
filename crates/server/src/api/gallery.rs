//! Gallery API handlers.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use vidarium_core::gallery::VideoArtifact;

use crate::state::AppState;

/// Response shape for a single gallery video.
#[derive(Debug, Serialize)]
pub struct VideoArtifactResponse {
    pub id: String,
    pub source_locator: String,
    pub title: String,
    pub description: Option<String>,
    pub is_generated: bool,
    pub aspect_ratio: vidarium_core::AspectRatio,
    pub created_at: String,
}

impl From<VideoArtifact> for VideoArtifactResponse {
    fn from(artifact: VideoArtifact) -> Self {
        Self {
            id: artifact.id,
            source_locator: artifact.source_locator,
            title: artifact.title,
            description: artifact.description,
            is_generated: artifact.is_generated,
            aspect_ratio: artifact.aspect_ratio,
            created_at: artifact.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> impl IntoResponse {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// GET /api/v1/videos
pub async fn list_videos(State(state): State<Arc<AppState>>) -> Json<Vec<VideoArtifactResponse>> {
    let videos = state
        .gallery()
        .list()
        .await
        .into_iter()
        .map(VideoArtifactResponse::from)
        .collect();
    Json(videos)
}

/// GET /api/v1/videos/{id}
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<VideoArtifactResponse>, StatusCode> {
    state
        .gallery()
        .get(&id)
        .await
        .map(VideoArtifactResponse::from)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// POST /api/v1/videos (multipart upload)
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<VideoArtifactResponse>), axum::response::Response> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("invalid multipart body: {}", e))
            .into_response()
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(|n| n.to_string())
            .ok_or_else(|| {
                error_response(StatusCode::BAD_REQUEST, "upload field has no file name")
                    .into_response()
            })?;

        let bytes = field.bytes().await.map_err(|e| {
            error_response(
                StatusCode::BAD_REQUEST,
                format!("failed to read upload body: {}", e),
            )
            .into_response()
        })?;

        if bytes.is_empty() {
            return Err(
                error_response(StatusCode::BAD_REQUEST, "uploaded file is empty").into_response()
            );
        }

        let artifact = state.importer().import(&file_name, bytes).await.map_err(|e| {
            warn!("Upload import failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        })?;

        state.gallery().add(artifact.clone()).await;
        return Ok((StatusCode::CREATED, Json(artifact.into())));
    }

    Err(error_response(StatusCode::BAD_REQUEST, "missing 'file' field").into_response())
}
