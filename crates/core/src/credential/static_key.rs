//! Static API key provider.

use async_trait::async_trait;

use super::{CredentialError, KeyProvider};

/// Key provider backed by a fixed key from configuration.
///
/// There is no interactive selection flow in a headless deployment, so
/// `open_key_selector` reports that rather than pretending to succeed.
pub struct StaticKeyProvider {
    key: Option<String>,
}

impl StaticKeyProvider {
    pub fn new(key: Option<String>) -> Self {
        // An empty string is as good as no key.
        let key = key.filter(|k| !k.trim().is_empty());
        Self { key }
    }
}

#[async_trait]
impl KeyProvider for StaticKeyProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn has_key(&self) -> bool {
        self.key.is_some()
    }

    async fn open_key_selector(&self) -> Result<(), CredentialError> {
        Err(CredentialError::SelectorUnavailable(
            "no interactive selector in headless mode; set credential.api_key".to_string(),
        ))
    }

    async fn key(&self) -> Option<String> {
        self.key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_key_is_available() {
        let provider = StaticKeyProvider::new(Some("secret-key".to_string()));
        assert!(provider.has_key().await);
        assert_eq!(provider.key().await.as_deref(), Some("secret-key"));
    }

    #[tokio::test]
    async fn test_missing_key() {
        let provider = StaticKeyProvider::new(None);
        assert!(!provider.has_key().await);
        assert!(provider.key().await.is_none());
    }

    #[tokio::test]
    async fn test_blank_key_counts_as_missing() {
        let provider = StaticKeyProvider::new(Some("   ".to_string()));
        assert!(!provider.has_key().await);
    }

    #[tokio::test]
    async fn test_selector_is_unavailable() {
        let provider = StaticKeyProvider::new(None);
        let result = provider.open_key_selector().await;
        assert!(matches!(
            result,
            Err(CredentialError::SelectorUnavailable(_))
        ));
    }
}
