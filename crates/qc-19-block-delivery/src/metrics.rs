//! # Delivery Metrics
//!
//! Prometheus metrics for deliver requests.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! qc-19-block-delivery = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `deliver_seek_requests_total` - Counter of seek requests sent (by start kind)
//! - `deliver_height_failures_total` - Counter of ledger height lookups that failed

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Seek requests sent, labeled by start position kind
    pub static ref SEEK_REQUESTS: IntCounterVec = register_int_counter_vec!(
        "deliver_seek_requests_total",
        "Total number of seek requests sent to the ordering service",
        &["start"]
    )
    .expect("Failed to create SEEK_REQUESTS metric");

    /// Failed ledger height lookups
    pub static ref HEIGHT_FAILURES: IntCounter = register_int_counter!(
        "deliver_height_failures_total",
        "Total number of ledger height lookups that failed"
    )
    .expect("Failed to create HEIGHT_FAILURES metric");
}

/// Record a seek request by start kind
#[cfg(feature = "metrics")]
pub fn record_seek_request(start: &str) {
    SEEK_REQUESTS.with_label_values(&[start]).inc();
}

/// Record a failed ledger height lookup
#[cfg(feature = "metrics")]
pub fn record_height_unavailable() {
    HEIGHT_FAILURES.inc();
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_seek_request(_start: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_height_unavailable() {}
