//! Local file upload import.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use super::types::VideoArtifact;
use crate::media::{MediaError, MediaStore};
use crate::metrics::UPLOADS_TOTAL;

const DEFAULT_EXTENSION: &str = "mp4";

/// Turns a user-supplied video file into a gallery artifact.
pub struct UploadImporter {
    media: Arc<dyn MediaStore>,
}

impl UploadImporter {
    pub fn new(media: Arc<dyn MediaStore>) -> Self {
        Self { media }
    }

    /// Store the uploaded bytes and build the artifact describing them.
    ///
    /// The title is the file name without its extension; the description
    /// records the upload origin and size in megabytes.
    pub async fn import(
        &self,
        file_name: &str,
        bytes: Bytes,
    ) -> Result<VideoArtifact, MediaError> {
        let id = Uuid::new_v4().to_string();
        let size_mb = bytes.len() as f64 / 1024.0 / 1024.0;
        let title = title_from_file_name(file_name);
        let extension = extension_of(file_name).unwrap_or(DEFAULT_EXTENSION);

        let locator = self.media.put(&id, extension, bytes).await?;
        UPLOADS_TOTAL.inc();
        info!(id = %id, file_name, size_mb, "imported uploaded video");

        Ok(VideoArtifact::new(id, locator, title)
            .with_description(format!("Uploaded from local: {:.2} MB", size_mb)))
    }
}

/// File name without its extension, or the whole name when there is none.
fn title_from_file_name(file_name: &str) -> String {
    match file_name.rfind('.') {
        // A leading dot is part of the name, not an extension separator.
        Some(idx) if idx > 0 => file_name[..idx].to_string(),
        _ => file_name.to_string(),
    }
}

fn extension_of(file_name: &str) -> Option<&str> {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < file_name.len() => Some(&file_name[idx + 1..]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryMediaStore;

    #[test]
    fn test_title_strips_extension() {
        assert_eq!(title_from_file_name("holiday.mp4"), "holiday");
        assert_eq!(title_from_file_name("two.dots.webm"), "two.dots");
    }

    #[test]
    fn test_title_without_extension() {
        assert_eq!(title_from_file_name("rawfile"), "rawfile");
        assert_eq!(title_from_file_name(".hidden"), ".hidden");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("clip.webm"), Some("webm"));
        assert_eq!(extension_of("noext"), None);
        assert_eq!(extension_of(".hidden"), None);
        assert_eq!(extension_of("trailing."), None);
    }

    #[tokio::test]
    async fn test_import_builds_artifact() {
        let media = Arc::new(MemoryMediaStore::new());
        let importer = UploadImporter::new(media.clone());

        let bytes = Bytes::from(vec![0u8; 2 * 1024 * 1024]);
        let artifact = importer.import("holiday.mp4", bytes).await.unwrap();

        assert_eq!(artifact.title, "holiday");
        assert_eq!(
            artifact.description.as_deref(),
            Some("Uploaded from local: 2.00 MB")
        );
        assert!(!artifact.is_generated);

        let stored = media.read(&artifact.source_locator).await.unwrap();
        assert_eq!(stored.len(), 2 * 1024 * 1024);
    }
}
