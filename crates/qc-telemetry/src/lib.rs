//! # QC Telemetry
//!
//! Logging and metrics plumbing shared by the ordering services.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qc_telemetry::{init_logging, render_metrics, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env("qc-18-channel-admission");
//! init_logging(&config)?;
//!
//! // Serve on /metrics
//! let body = render_metrics()?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QC_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `QC_CONSOLE_OUTPUT` | `true` | Log to stdout |
//! | `QC_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |

#![warn(missing_docs)]

mod config;
mod logging;
mod metrics;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};
pub use metrics::render_metrics;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Global subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// Metrics could not be encoded.
    #[error("Failed to export Prometheus metrics: {0}")]
    MetricsExport(String),

    /// Configuration is not usable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
