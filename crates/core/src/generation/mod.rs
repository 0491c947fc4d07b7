//! Video generation pipeline.
//!
//! The orchestrator owns the lifecycle of a single generation attempt:
//! credential check, submission, polling, download, and materialization
//! into the gallery.

mod config;
mod runner;
mod types;

pub use config::GenerationConfig;
pub use runner::{resolve_result, GenerationOrchestrator, MSG_CHECKING_KEY};
pub use types::{
    AspectRatio, GenerationError, GenerationJob, GenerationRequest, JobStatus, Resolution,
};
