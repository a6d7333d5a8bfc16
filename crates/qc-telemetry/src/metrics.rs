//! Prometheus text exposition.
//!
//! Service crates register their counters on the default registry (behind
//! their `metrics` feature); this module renders whatever is registered.

use prometheus::{Encoder, TextEncoder};

use crate::TelemetryError;

/// Encode all metrics of the default registry as Prometheus text format.
pub fn render_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsExport(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsExport(e.to_string()))
}
