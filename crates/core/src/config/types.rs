//! Configuration types.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::generation::{AspectRatio, GenerationConfig};
use crate::provider::VeoConfig;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: VeoConfig,
    #[serde(default)]
    pub credential: CredentialConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap_or(IpAddr::from([0, 0, 0, 0]))
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// API credential configuration.
///
/// `api_key` supports `${ENV_VAR}` indirection so the key itself can stay
/// out of the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CredentialConfig {
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Media storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Directory where video files are written.
    #[serde(default = "default_media_root")]
    pub root: PathBuf,
}

fn default_media_root() -> PathBuf {
    PathBuf::from("media")
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: default_media_root(),
        }
    }
}

/// Gallery configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GalleryConfig {
    /// Videos to pre-populate the gallery with on startup.
    #[serde(default)]
    pub seed: Vec<SeedVideo>,
}

/// One pre-seeded gallery entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedVideo {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

/// Configuration safe to expose over the API: secrets reduced to flags.
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub provider: VeoConfig,
    pub credential: SanitizedCredentialConfig,
    pub generation: GenerationConfig,
    pub media: MediaConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCredentialConfig {
    pub api_key_set: bool,
}

impl Config {
    /// Strip secrets for external exposure.
    pub fn sanitized(&self) -> SanitizedConfig {
        SanitizedConfig {
            server: self.server.clone(),
            provider: self.provider.clone(),
            credential: SanitizedCredentialConfig {
                api_key_set: self.credential.api_key.is_some(),
            },
            generation: self.generation.clone(),
            media: self.media.clone(),
        }
    }
}
