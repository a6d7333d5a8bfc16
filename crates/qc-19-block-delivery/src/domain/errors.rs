//! Error types for block delivery.

use shared_types::EnvelopeError;
use thiserror::Error;

/// Failure reading the local ledger height.
///
/// Displays the provider's message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct LedgerError(pub String);

impl LedgerError {
    /// Wrap a provider message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failure handing a request to the delivery stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The stream was torn down.
    #[error("delivery stream closed")]
    Closed,

    /// Transport-level failure, message passed through as-is.
    #[error("{0}")]
    Transport(String),
}

/// Failure loading client TLS credentials.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Certificate file could not be read.
    #[error("failed to read certificate file {path}: {reason}")]
    Io {
        /// File path
        path: String,
        /// Underlying error
        reason: String,
    },

    /// PEM input is not well formed.
    #[error("invalid PEM certificate data: {0}")]
    InvalidPem(String),

    /// PEM input holds no certificate.
    #[error("no certificate found in PEM input")]
    NoCertificate,
}

/// Block delivery errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliverError {
    /// Ledger height could not be read; cause unmodified.
    #[error(transparent)]
    HeightUnavailable(LedgerError),

    /// TLS is enabled but the credential provider has no client certificate.
    #[error("TLS is enabled but no client certificate is available")]
    MissingClientCertificate,

    /// Client credentials could not be loaded.
    #[error("client credentials unavailable: {0}")]
    Credentials(#[from] CredentialError),

    /// Seek envelope could not be built.
    #[error("failed to build seek envelope: {0}")]
    Envelope(#[from] EnvelopeError),

    /// Delivery client refused the request; cause unmodified.
    #[error(transparent)]
    SendError(SendError),
}
