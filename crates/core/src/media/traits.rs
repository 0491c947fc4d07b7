//! Trait definitions for the media store.

use async_trait::async_trait;
use bytes::Bytes;

use super::error::MediaError;

/// A locally addressable reference to stored media bytes.
///
/// The presentation layer uses the locator verbatim as a playback source
/// (the fs store yields `/media/<file>` paths served by the HTTP layer).
pub type MediaLocator = String;

/// Stores raw media bytes and hands back locators the UI can play.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Returns the name of this media store implementation.
    fn name(&self) -> &str;

    /// Store bytes under the given artifact id, returning a locator.
    async fn put(
        &self,
        id: &str,
        extension: &str,
        bytes: Bytes,
    ) -> Result<MediaLocator, MediaError>;

    /// Read back the bytes behind a locator produced by this store.
    async fn read(&self, locator: &str) -> Result<Bytes, MediaError>;
}
