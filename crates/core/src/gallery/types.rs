//! Gallery data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generation::AspectRatio;
use crate::media::MediaLocator;

/// A video the gallery can list and play.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoArtifact {
    /// Unique identifier.
    pub id: String,
    /// Playable source: a `/media/...` locator or an external URL for
    /// seeded entries.
    pub source_locator: MediaLocator,
    /// Display title.
    pub title: String,
    /// Longer description, when one exists.
    pub description: Option<String>,
    /// True when the artifact came out of the generation pipeline.
    pub is_generated: bool,
    /// Display aspect ratio.
    pub aspect_ratio: AspectRatio,
    /// When the artifact entered the gallery.
    pub created_at: DateTime<Utc>,
}

impl VideoArtifact {
    pub fn new(
        id: impl Into<String>,
        source_locator: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_locator: source_locator.into(),
            title: title.into(),
            description: None,
            is_generated: false,
            aspect_ratio: AspectRatio::default(),
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn generated(mut self) -> Self {
        self.is_generated = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_builder() {
        let artifact = VideoArtifact::new("id-1", "/media/id-1.mp4", "a cat")
            .with_description("a cat chasing a laser")
            .with_aspect_ratio(AspectRatio::Tall)
            .generated();

        assert_eq!(artifact.id, "id-1");
        assert_eq!(artifact.source_locator, "/media/id-1.mp4");
        assert_eq!(artifact.title, "a cat");
        assert_eq!(artifact.description.as_deref(), Some("a cat chasing a laser"));
        assert!(artifact.is_generated);
        assert_eq!(artifact.aspect_ratio, AspectRatio::Tall);
    }

    #[test]
    fn test_artifact_defaults() {
        let artifact = VideoArtifact::new("id-2", "https://example.com/v.mp4", "seed");
        assert!(!artifact.is_generated);
        assert!(artifact.description.is_none());
        assert_eq!(artifact.aspect_ratio, AspectRatio::Wide);
    }

    #[test]
    fn test_artifact_serialization() {
        let artifact = VideoArtifact::new("id-3", "/media/id-3.mp4", "clip");
        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["aspect_ratio"], "16:9");
        assert_eq!(json["is_generated"], false);
    }
}
