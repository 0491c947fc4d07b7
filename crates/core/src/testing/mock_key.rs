//! Mock key provider for testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::credential::{CredentialError, KeyProvider};

/// Mock implementation of the KeyProvider trait.
///
/// The selection flow can be scripted to install a key, fail, or resolve
/// without changing anything, which is how the credential edge cases are
/// exercised.
pub struct MockKeyProvider {
    key: Arc<RwLock<Option<String>>>,
    /// Key installed when the selector resolves, if any.
    selector_installs: Arc<RwLock<Option<String>>>,
    /// If set, the next selector call fails with this error (consumed on use).
    selector_error: Arc<RwLock<Option<CredentialError>>>,
    /// Number of selector invocations.
    selector_calls: Arc<RwLock<usize>>,
}

impl Default for MockKeyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockKeyProvider {
    /// Create a provider with no key selected.
    pub fn new() -> Self {
        Self {
            key: Arc::new(RwLock::new(None)),
            selector_installs: Arc::new(RwLock::new(None)),
            selector_error: Arc::new(RwLock::new(None)),
            selector_calls: Arc::new(RwLock::new(0)),
        }
    }

    /// Create a provider with a key already selected.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Arc::new(RwLock::new(Some(key.into()))),
            ..Self::new()
        }
    }

    /// Replace the selected key.
    pub async fn set_key(&self, key: impl Into<String>) {
        *self.key.write().await = Some(key.into());
    }

    /// Remove the selected key.
    pub async fn clear_key(&self) {
        *self.key.write().await = None;
    }

    /// Make the selection flow install the given key when invoked.
    pub async fn set_selector_installs(&self, key: impl Into<String>) {
        *self.selector_installs.write().await = Some(key.into());
    }

    /// Fail the next selector invocation with the given error.
    pub async fn set_selector_error(&self, error: CredentialError) {
        *self.selector_error.write().await = Some(error);
    }

    /// Number of times the selection flow was invoked.
    pub async fn selector_calls(&self) -> usize {
        *self.selector_calls.read().await
    }
}

#[async_trait]
impl KeyProvider for MockKeyProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn has_key(&self) -> bool {
        self.key.read().await.is_some()
    }

    async fn open_key_selector(&self) -> Result<(), CredentialError> {
        *self.selector_calls.write().await += 1;

        if let Some(error) = self.selector_error.write().await.take() {
            return Err(error);
        }

        if let Some(key) = self.selector_installs.read().await.clone() {
            *self.key.write().await = Some(key);
        }
        // Resolving without installing a key mirrors a dismissed dialog.
        Ok(())
    }

    async fn key(&self) -> Option<String> {
        self.key.read().await.clone()
    }
}
