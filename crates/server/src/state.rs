use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use vidarium_core::{
    gallery::{GalleryStore, UploadImporter},
    generation::GenerationOrchestrator,
    status::StatusProjector,
    Config, SanitizedConfig,
};

/// State of the current (or last) generation attempt.
#[derive(Default)]
pub struct GenerationState {
    pub projector: StatusProjector,
    /// Id of the artifact produced by the last completed attempt.
    pub last_artifact: Option<String>,
}

/// Shared application state
pub struct AppState {
    config: Config,
    gallery: Arc<dyn GalleryStore>,
    media_root: PathBuf,
    importer: UploadImporter,
    orchestrator: GenerationOrchestrator,
    generation: RwLock<GenerationState>,
}

impl AppState {
    pub fn new(
        config: Config,
        gallery: Arc<dyn GalleryStore>,
        media_root: PathBuf,
        importer: UploadImporter,
        orchestrator: GenerationOrchestrator,
    ) -> Self {
        Self {
            config,
            gallery,
            media_root,
            importer,
            orchestrator,
            generation: RwLock::new(GenerationState::default()),
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        self.config.sanitized()
    }

    pub fn gallery(&self) -> &dyn GalleryStore {
        self.gallery.as_ref()
    }

    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    pub fn importer(&self) -> &UploadImporter {
        &self.importer
    }

    pub fn orchestrator(&self) -> &GenerationOrchestrator {
        &self.orchestrator
    }

    pub fn generation(&self) -> &RwLock<GenerationState> {
        &self.generation
    }
}
