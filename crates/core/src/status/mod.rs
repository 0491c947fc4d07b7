//! Job status projection for the presentation layer.
//!
//! The orchestrator reports progress through a callback; this module turns
//! those callbacks into a small state machine a UI can render directly.
//!
//! State machine flow:
//! ```text
//! Idle -> ValidatingKey -> Generating -> Completed
//!              |               |
//!              +----> Error <--+
//! ```
//! `Error` is reachable from any non-terminal phase. `Idle` is both the
//! initial phase and the phase re-entered after a reset.

use serde::{Deserialize, Serialize};

/// User-observable phase of a generation attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    /// No generation attempt in progress.
    #[default]
    Idle,
    /// Checking that an API credential is selected.
    ValidatingKey,
    /// Job submitted; polling the provider and downloading the result.
    Generating,
    /// The artifact is ready (terminal).
    Completed,
    /// The attempt failed (terminal).
    Error,
}

impl GenerationPhase {
    /// Returns true if no further transitions are expected before a reset.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationPhase::Completed | GenerationPhase::Error)
    }

    /// Returns true while an attempt is actively running.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            GenerationPhase::ValidatingKey | GenerationPhase::Generating
        )
    }

    /// Returns the phase as a string (for filtering and responses).
    pub fn state_type(&self) -> &'static str {
        match self {
            GenerationPhase::Idle => "idle",
            GenerationPhase::ValidatingKey => "validating_key",
            GenerationPhase::Generating => "generating",
            GenerationPhase::Completed => "completed",
            GenerationPhase::Error => "error",
        }
    }
}

/// A progress notification emitted by the orchestrator.
///
/// Updates are emitted strictly in lifecycle order; the phase identifies
/// which step is currently executing and the message is display-ready text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressUpdate {
    pub phase: GenerationPhase,
    pub message: String,
}

impl ProgressUpdate {
    pub fn new(phase: GenerationPhase, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: message.into(),
        }
    }

    pub fn validating_key(message: impl Into<String>) -> Self {
        Self::new(GenerationPhase::ValidatingKey, message)
    }

    pub fn generating(message: impl Into<String>) -> Self {
        Self::new(GenerationPhase::Generating, message)
    }
}

/// Projects orchestrator progress onto the phase machine.
///
/// Holds the latest phase, the latest human-readable message, and the last
/// failure reason when in `Error`. Performs no validation of its own; it
/// only records what the orchestrator reports.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusProjector {
    phase: GenerationPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl StatusProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record a progress update from the orchestrator.
    pub fn observe(&mut self, update: &ProgressUpdate) {
        self.phase = update.phase;
        self.message = Some(update.message.clone());
        self.error = None;
    }

    /// Mark the attempt as successfully completed.
    pub fn complete(&mut self, message: impl Into<String>) {
        self.phase = GenerationPhase::Completed;
        self.message = Some(message.into());
        self.error = None;
    }

    /// Mark the attempt as failed, keeping the reason for display.
    pub fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        self.phase = GenerationPhase::Error;
        self.message = Some(reason.clone());
        self.error = Some(reason);
    }

    /// Return to `Idle`, clearing message and error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
