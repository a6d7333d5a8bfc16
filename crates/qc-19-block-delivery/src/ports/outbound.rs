//! Driven ports (Outbound dependencies)

use async_trait::async_trait;
use rustls::pki_types::CertificateDer;
use shared_types::Envelope;

use crate::domain::{LedgerError, SendError};

/// Local ledger status.
#[async_trait]
pub trait LedgerInfo: Send + Sync {
    /// Number of blocks committed locally; 0 for an empty ledger.
    async fn ledger_height(&self) -> Result<u64, LedgerError>;
}

/// Client side of a deliver stream.
#[async_trait]
pub trait BlocksDeliverer: Send + Sync {
    /// Send a request envelope on the stream.
    async fn send(&self, env: Envelope) -> Result<(), SendError>;
}

/// Client TLS credentials.
pub trait CredentialSupport: Send + Sync {
    /// Client certificate chain, leaf first. Empty when none is configured.
    fn client_certificate_chain(&self) -> Vec<CertificateDer<'static>>;
}
