use super::{types::Config, ConfigError};

/// Validate a loaded configuration.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port must be non-zero".to_string(),
        ));
    }

    if config.generation.poll_interval_ms == 0 {
        return Err(ConfigError::ValidationError(
            "generation.poll_interval_ms must be non-zero".to_string(),
        ));
    }

    if config.provider.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "provider.base_url must not be empty".to_string(),
        ));
    }

    if config.provider.model.is_empty() {
        return Err(ConfigError::ValidationError(
            "provider.model must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut config = Config::default();
        config.generation.poll_interval_ms = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut config = Config::default();
        config.provider.model = String::new();
        assert!(validate_config(&config).is_err());
    }
}
