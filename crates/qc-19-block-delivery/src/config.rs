//! # Delivery Configuration

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Block delivery client configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverConfig {
    /// Whether the deliver stream runs over TLS.
    ///
    /// When set, every request is bound to the client certificate.
    pub tls_enabled: bool,

    /// PEM file holding the client certificate chain, leaf first.
    pub client_cert_path: Option<PathBuf>,
}

impl DeliverConfig {
    /// Plaintext, no credentials.
    pub fn for_testing() -> Self {
        Self::default()
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_DELIVER_TLS`: Enable TLS binding (default: false)
    /// - `QC_DELIVER_CLIENT_CERT`: Client certificate PEM path (default: none)
    pub fn from_env() -> Self {
        Self {
            tls_enabled: env::var("QC_DELIVER_TLS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
            client_cert_path: env::var("QC_DELIVER_CLIENT_CERT")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}
