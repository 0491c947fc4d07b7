//! Gallery storage.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::types::VideoArtifact;

/// Holds the set of videos the gallery displays, newest first.
#[async_trait]
pub trait GalleryStore: Send + Sync {
    /// Name of this store implementation.
    fn name(&self) -> &str;

    /// Insert an artifact at the front of the gallery.
    async fn add(&self, artifact: VideoArtifact);

    /// All artifacts, newest first.
    async fn list(&self) -> Vec<VideoArtifact>;

    /// Look up a single artifact by id.
    async fn get(&self, id: &str) -> Option<VideoArtifact>;

    /// Number of artifacts in the gallery.
    async fn len(&self) -> usize;
}

/// In-memory gallery store.
#[derive(Default)]
pub struct MemoryGalleryStore {
    artifacts: RwLock<Vec<VideoArtifact>>,
}

impl MemoryGalleryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GalleryStore for MemoryGalleryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn add(&self, artifact: VideoArtifact) {
        let mut artifacts = self.artifacts.write().await;
        artifacts.insert(0, artifact);
    }

    async fn list(&self) -> Vec<VideoArtifact> {
        self.artifacts.read().await.clone()
    }

    async fn get(&self, id: &str) -> Option<VideoArtifact> {
        self.artifacts
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    async fn len(&self) -> usize {
        self.artifacts.read().await.len()
    }
}
