//! # Admission Configuration
//!
//! Which generic message rules run ahead of the system channel filter.

use std::env;

use serde::{Deserialize, Serialize};

/// Rule selection for the system channel rule set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionConfig {
    /// Reject envelopes with an empty payload.
    pub reject_empty: bool,

    /// Reject envelopes larger than the batch size's absolute maximum.
    pub enforce_max_bytes: bool,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            reject_empty: true,
            enforce_max_bytes: true,
        }
    }
}

impl AdmissionConfig {
    /// Only the system channel filter runs.
    pub fn for_testing() -> Self {
        Self {
            reject_empty: false,
            enforce_max_bytes: false,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_ADMISSION_REJECT_EMPTY`: Enable the empty-message rule (default: true)
    /// - `QC_ADMISSION_MAX_BYTES`: Enable the size rule (default: true)
    pub fn from_env() -> Self {
        Self {
            reject_empty: flag("QC_ADMISSION_REJECT_EMPTY", true),
            enforce_max_bytes: flag("QC_ADMISSION_MAX_BYTES", true),
        }
    }
}

fn flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v.to_lowercase() != "false" && v != "0")
        .unwrap_or(default)
}
