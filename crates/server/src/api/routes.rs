use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use super::{gallery, generation, handlers};
use crate::state::AppState;

/// Maximum accepted upload size (512 MB).
const MAX_UPLOAD_BYTES: usize = 512 * 1024 * 1024;

pub fn create_router(state: Arc<AppState>) -> Router {
    let media_dir = state.media_root().to_path_buf();

    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Gallery
        .route("/videos", get(gallery::list_videos))
        .route(
            "/videos",
            post(gallery::upload_video).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/videos/{id}", get(gallery::get_video))
        // Generation
        .route("/generations", post(generation::start_generation))
        .route("/generations/status", get(generation::generation_status))
        .route("/generations/reset", post(generation::reset_generation))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .nest_service("/media", ServeDir::new(media_dir))
        .layer(middleware::from_fn(super::middleware::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        // The gallery UI is served from a different origin during development
        .layer(CorsLayer::permissive())
}
