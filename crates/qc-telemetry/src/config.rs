//! Logging configuration for an ordering service process.

use std::env;

use serde::{Deserialize, Serialize};

/// How a service process logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name logged once at startup (`qc-18-channel-admission`, ...)
    pub service_name: String,

    /// Level or full `EnvFilter` directive
    pub log_level: String,

    /// Write log lines to stdout
    pub console_output: bool,

    /// One JSON object per line instead of the pretty format
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "quantum-chain".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

fn flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

impl TelemetryConfig {
    /// Configuration for `service_name`, overridden by:
    ///
    /// - `QC_LOG_LEVEL` (else `RUST_LOG`): level or directive
    /// - `QC_CONSOLE_OUTPUT`: stdout logging on/off
    /// - `QC_JSON_LOGS`: JSON lines; defaults on inside a container
    pub fn from_env(service_name: impl Into<String>) -> Self {
        let in_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();
        let defaults = Self::default();

        Self {
            service_name: service_name.into(),
            log_level: env::var("QC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            console_output: flag("QC_CONSOLE_OUTPUT").unwrap_or(defaults.console_output),
            json_logs: flag("QC_JSON_LOGS").unwrap_or(in_container),
        }
    }

    /// Quiet configuration for tests: warnings only, no console.
    pub fn for_testing(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "warn".to_string(),
            console_output: false,
            json_logs: false,
        }
    }
}
