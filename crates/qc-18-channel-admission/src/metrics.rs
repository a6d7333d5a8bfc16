//! # Admission Metrics
//!
//! Prometheus metrics for channel-creation decisions.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! qc-18-channel-admission = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `admission_channels_created_total` - Counter of admitted channel creations
//! - `admission_rejected_total` - Counter of rejected proposals (by kind)

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total channel creations admitted
    pub static ref CHANNELS_CREATED: IntCounter = register_int_counter!(
        "admission_channels_created_total",
        "Total number of channel creations admitted"
    )
    .expect("Failed to create CHANNELS_CREATED metric");

    /// Total proposals rejected, labeled by error kind
    pub static ref PROPOSALS_REJECTED: IntCounterVec = register_int_counter_vec!(
        "admission_rejected_total",
        "Total number of channel-creation proposals rejected",
        &["kind"]
    )
    .expect("Failed to create PROPOSALS_REJECTED metric");
}

/// Record an admitted channel creation
#[cfg(feature = "metrics")]
pub fn record_channel_admitted() {
    CHANNELS_CREATED.inc();
}

/// Record a rejected proposal with its error kind
#[cfg(feature = "metrics")]
pub fn record_channel_rejected(kind: &str) {
    PROPOSALS_REJECTED.with_label_values(&[kind]).inc();
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_channel_admitted() {}

#[cfg(not(feature = "metrics"))]
pub fn record_channel_rejected(_kind: &str) {}
