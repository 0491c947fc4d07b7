//! Generation orchestrator configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the generation orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Fixed interval between provider status polls (milliseconds).
    /// The loop never spins faster than this.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval() -> u64 {
    5000 // 5 seconds
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.poll_interval_ms, 5000);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: GenerationConfig = toml::from_str("").unwrap();
        assert_eq!(config.poll_interval_ms, 5000);
    }

    #[test]
    fn test_deserialize_override() {
        let config: GenerationConfig = toml::from_str("poll_interval_ms = 250").unwrap();
        assert_eq!(config.poll_interval_ms, 250);
    }
}
