//! Video gallery.
//!
//! Artifacts come from three places: the generation pipeline, local
//! uploads, and seed entries from configuration. The store keeps them
//! newest first for display.

mod store;
mod types;
mod upload;

pub use store::{GalleryStore, MemoryGalleryStore};
pub use types::VideoArtifact;
pub use upload::UploadImporter;
