pub mod config;
pub mod credential;
pub mod gallery;
pub mod generation;
pub mod media;
pub mod metrics;
pub mod provider;
pub mod status;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
};
pub use credential::{create_key_provider, CredentialError, KeyProvider, StaticKeyProvider};
pub use gallery::{GalleryStore, MemoryGalleryStore, UploadImporter, VideoArtifact};
pub use generation::{
    AspectRatio, GenerationConfig, GenerationError, GenerationOrchestrator, GenerationRequest,
    Resolution,
};
pub use media::{FsMediaStore, MediaError, MediaStore};
pub use provider::{GenerationProvider, JobHandle, ProviderError, VeoClient, VeoConfig};
pub use status::{GenerationPhase, ProgressUpdate, StatusProjector};
