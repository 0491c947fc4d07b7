use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use vidarium_core::{
    create_key_provider,
    gallery::{GalleryStore, MemoryGalleryStore, UploadImporter, VideoArtifact},
    generation::GenerationOrchestrator,
    load_config,
    media::{FsMediaStore, MediaStore},
    provider::{GenerationProvider, VeoClient},
    validate_config, KeyProvider,
};

use vidarium_server::api::create_router;
use vidarium_server::state::AppState;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Vidarium {} starting", VERSION);

    // Determine config path
    let config_path = std::env::var("VIDARIUM_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Provider model: {}", config.provider.model);
    info!("Media root: {:?}", config.media.root);

    // Create key provider
    let keys: Arc<dyn KeyProvider> = Arc::from(
        create_key_provider(&config.credential).context("Failed to create key provider")?,
    );
    if keys.has_key().await {
        info!("API key configured ({})", keys.name());
    } else {
        info!("No API key configured; generation requests will fail until one is set");
    }

    // Create generation provider
    let provider: Arc<dyn GenerationProvider> = Arc::new(
        VeoClient::new(config.provider.clone(), Arc::clone(&keys))
            .context("Failed to create Veo client")?,
    );
    info!("Generation provider initialized: {}", provider.name());

    // Create media store
    let media_store = FsMediaStore::create(&config.media.root)
        .await
        .context("Failed to create media store")?;
    let media_root = media_store.root().to_path_buf();
    let media: Arc<dyn MediaStore> = Arc::new(media_store);

    // Create gallery and seed it from config
    let gallery: Arc<dyn GalleryStore> = Arc::new(MemoryGalleryStore::new());
    for seed in config.gallery.seed.iter().rev() {
        let mut artifact = VideoArtifact::new(Uuid::new_v4().to_string(), &seed.url, &seed.title)
            .with_aspect_ratio(seed.aspect_ratio);
        if let Some(description) = &seed.description {
            artifact = artifact.with_description(description.clone());
        }
        gallery.add(artifact).await;
    }
    info!("Gallery seeded with {} videos", gallery.len().await);

    // Create upload importer and orchestrator
    let importer = UploadImporter::new(Arc::clone(&media));
    let orchestrator = GenerationOrchestrator::new(
        config.generation.clone(),
        provider,
        keys,
        Arc::clone(&media),
    );

    // Create app state
    let state = Arc::new(AppState::new(
        config.clone(),
        gallery,
        media_root,
        importer,
        orchestrator,
    ));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
