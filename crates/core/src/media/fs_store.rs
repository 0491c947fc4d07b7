//! File system media store implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::error::MediaError;
use super::traits::{MediaLocator, MediaStore};

/// Prefix under which the HTTP layer serves the media root.
pub const MEDIA_URL_PREFIX: &str = "/media/";

/// Media store that writes artifacts into a directory on disk.
///
/// Locators take the form `/media/<id>.<ext>`, matching the static file
/// route the server mounts over the same root.
pub struct FsMediaStore {
    root: PathBuf,
}

impl FsMediaStore {
    /// Creates the store, ensuring the root directory exists.
    pub async fn create(root: impl Into<PathBuf>) -> Result<Self, MediaError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(|_| MediaError::InvalidRoot { path: root.clone() })?;
        Ok(Self { root })
    }

    /// The directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_name_from_locator(locator: &str) -> Result<&str, MediaError> {
        let name = locator
            .strip_prefix(MEDIA_URL_PREFIX)
            .ok_or_else(|| MediaError::UnknownLocator(locator.to_string()))?;
        // Locators must name a single file inside the root.
        if name.is_empty() || name.contains('/') || name.contains("..") {
            return Err(MediaError::UnknownLocator(locator.to_string()));
        }
        Ok(name)
    }
}

#[async_trait]
impl MediaStore for FsMediaStore {
    fn name(&self) -> &str {
        "fs"
    }

    async fn put(
        &self,
        id: &str,
        extension: &str,
        bytes: Bytes,
    ) -> Result<MediaLocator, MediaError> {
        let file_name = format!("{}.{}", id, extension);
        let path = self.root.join(&file_name);

        let mut file = File::create(&path).await?;
        file.write_all(&bytes).await?;
        file.flush().await?;

        debug!(path = %path.display(), bytes = bytes.len(), "stored media file");
        Ok(format!("{}{}", MEDIA_URL_PREFIX, file_name))
    }

    async fn read(&self, locator: &str) -> Result<Bytes, MediaError> {
        let file_name = Self::file_name_from_locator(locator)?;
        let path = self.root.join(file_name);
        match fs::read(&path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(MediaError::UnknownLocator(locator.to_string()))
            }
            Err(e) => Err(MediaError::Io(e)),
        }
    }
}
