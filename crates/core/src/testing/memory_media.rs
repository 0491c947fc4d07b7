//! In-memory media store for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::media::{MediaError, MediaLocator, MediaStore};

/// Media store that keeps bytes in a map. Locators use a `mem://` scheme
/// so tests can tell them apart from fs locators.
#[derive(Default)]
pub struct MemoryMediaStore {
    files: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl MemoryMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored files.
    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }
}

#[async_trait]
impl MediaStore for MemoryMediaStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn put(
        &self,
        id: &str,
        extension: &str,
        bytes: Bytes,
    ) -> Result<MediaLocator, MediaError> {
        let locator = format!("mem://{}.{}", id, extension);
        self.files.write().await.insert(locator.clone(), bytes);
        Ok(locator)
    }

    async fn read(&self, locator: &str) -> Result<Bytes, MediaError> {
        self.files
            .read()
            .await
            .get(locator)
            .cloned()
            .ok_or_else(|| MediaError::UnknownLocator(locator.to_string()))
    }
}
