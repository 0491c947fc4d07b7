//! API credential management.
//!
//! Submitting a generation job and fetching its result bytes both require
//! an API key. The `KeyProvider` trait abstracts where that key comes from;
//! the deployment default reads it from configuration (with `${ENV_VAR}`
//! indirection), and tests script availability through the mock.

mod static_key;
mod traits;

pub use static_key::StaticKeyProvider;
pub use traits::{CredentialError, KeyProvider};

use crate::config::CredentialConfig;

/// Factory function to create a key provider from config.
pub fn create_key_provider(
    config: &CredentialConfig,
) -> Result<Box<dyn KeyProvider>, CredentialError> {
    let key = config
        .api_key
        .as_deref()
        .map(resolve_env)
        .transpose()?;
    Ok(Box::new(StaticKeyProvider::new(key)))
}

/// Resolve `${ENV_VAR}` syntax in a config value.
fn resolve_env(value: &str) -> Result<String, CredentialError> {
    if let Some(var) = value.strip_prefix("${").and_then(|v| v.strip_suffix('}')) {
        std::env::var(var).map_err(|_| {
            CredentialError::ConfigurationError(format!(
                "environment variable {} referenced by credential.api_key is not set",
                var
            ))
        })
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_env_plain_value() {
        assert_eq!(resolve_env("literal-key").unwrap(), "literal-key");
    }

    #[test]
    fn test_resolve_env_from_environment() {
        std::env::set_var("VIDARIUM_TEST_KEY_VAR", "from-env");
        assert_eq!(resolve_env("${VIDARIUM_TEST_KEY_VAR}").unwrap(), "from-env");
        std::env::remove_var("VIDARIUM_TEST_KEY_VAR");
    }

    #[test]
    fn test_resolve_env_missing_variable() {
        let result = resolve_env("${VIDARIUM_TEST_UNSET_VAR}");
        assert!(matches!(
            result,
            Err(CredentialError::ConfigurationError(_))
        ));
    }

    #[tokio::test]
    async fn test_create_key_provider_with_key() {
        let config = CredentialConfig {
            api_key: Some("abc".to_string()),
        };
        let provider = create_key_provider(&config).unwrap();
        assert_eq!(provider.name(), "static");
        assert!(provider.has_key().await);
    }

    #[tokio::test]
    async fn test_create_key_provider_without_key() {
        let config = CredentialConfig { api_key: None };
        let provider = create_key_provider(&config).unwrap();
        assert!(!provider.has_key().await);
    }
}
