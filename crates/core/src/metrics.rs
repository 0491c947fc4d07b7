//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Generation pipeline (attempts, durations, poll cycles)
//! - Gallery uploads

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

/// Generation attempts total by result.
pub static GENERATION_ATTEMPTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "vidarium_generation_attempts_total",
            "Total generation attempts",
        ),
        &["result"], // "success" or a GenerationError label
    )
    .unwrap()
});

/// Generation duration in seconds, from submission intent to artifact.
pub static GENERATION_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "vidarium_generation_duration_seconds",
            "Duration of a generation attempt",
        )
        .buckets(vec![1.0, 5.0, 15.0, 30.0, 60.0, 120.0, 300.0, 600.0]),
        &["result"],
    )
    .unwrap()
});

/// Provider status polls issued.
pub static POLL_CYCLES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("vidarium_poll_cycles_total", "Total provider status polls").unwrap()
});

/// Local video uploads imported into the gallery.
pub static UPLOADS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("vidarium_uploads_total", "Total local video uploads").unwrap()
});

/// Returns all core metrics for registration.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(GENERATION_ATTEMPTS.clone()),
        Box::new(GENERATION_DURATION.clone()),
        Box::new(POLL_CYCLES.clone()),
        Box::new(UPLOADS_TOTAL.clone()),
    ]
}
