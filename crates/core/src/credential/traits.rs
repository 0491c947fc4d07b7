use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("no API key selected")]
    Missing,

    #[error("interactive key selection unavailable: {0}")]
    SelectorUnavailable(String),

    #[error("configuration error: {0}")]
    ConfigurationError(String),
}

/// Source of the API credential required to submit jobs and fetch result
/// bytes.
///
/// The orchestrator only checks availability and triggers the selection
/// flow; credential storage belongs to the implementation.
#[async_trait]
pub trait KeyProvider: Send + Sync {
    /// Name of this key provider implementation.
    fn name(&self) -> &str;

    /// Returns true if a usable key is currently selected.
    async fn has_key(&self) -> bool;

    /// Trigger the interactive selection flow. Resolving does not imply a
    /// key was selected; callers re-check `has_key` afterwards.
    async fn open_key_selector(&self) -> Result<(), CredentialError>;

    /// The currently selected key, if any.
    async fn key(&self) -> Option<String>;
}
