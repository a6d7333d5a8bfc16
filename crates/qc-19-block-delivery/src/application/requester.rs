//! # Blocks Requester
//!
//! (Re)opens a deliver subscription for one channel. The request resumes at
//! the local ledger height, or at genesis for an empty ledger, and runs
//! without an upper bound.
//!
//! ## TLS Binding
//!
//! With TLS enabled the signed channel header carries the SHA-256 of the
//! client's leaf certificate, so the ordering service can reject a request
//! replayed over a different TLS session.

use std::sync::Arc;

use shared_crypto::{compute_sha256, Hash, SignerSerializer};
use shared_types::{create_signed_envelope_with_tls_binding, HeaderType, SeekInfo, SeekPosition};
use tracing::{debug, error};

use crate::adapters::{PemCredentials, StaticCredentials};
use crate::config::DeliverConfig;
use crate::domain::{seek_info_for_height, DeliverError};
use crate::metrics::{record_height_unavailable, record_seek_request};
use crate::ports::{BlocksDeliverer, CredentialSupport, LedgerInfo};

const MSG_VERSION: i32 = 0;
const EPOCH: u64 = 0;

/// Sends seek requests for one channel.
pub struct BlocksRequester {
    tls: bool,
    channel_id: String,
    client: Arc<dyn BlocksDeliverer>,
    signer: Arc<dyn SignerSerializer>,
    credentials: Arc<dyn CredentialSupport>,
}

impl BlocksRequester {
    /// Requester over explicit collaborators.
    pub fn new(
        tls: bool,
        channel_id: impl Into<String>,
        client: Arc<dyn BlocksDeliverer>,
        signer: Arc<dyn SignerSerializer>,
        credentials: Arc<dyn CredentialSupport>,
    ) -> Self {
        Self {
            tls,
            channel_id: channel_id.into(),
            client,
            signer,
            credentials,
        }
    }

    /// Requester whose credentials come from `config`.
    ///
    /// With TLS the certificate file is required and read once here; without
    /// TLS no certificate is loaded.
    pub fn from_config(
        config: &DeliverConfig,
        channel_id: impl Into<String>,
        client: Arc<dyn BlocksDeliverer>,
        signer: Arc<dyn SignerSerializer>,
    ) -> Result<Self, DeliverError> {
        let credentials: Arc<dyn CredentialSupport> =
            match (config.tls_enabled, &config.client_cert_path) {
                (true, Some(path)) => Arc::new(PemCredentials::load(path)?),
                (true, None) => return Err(DeliverError::MissingClientCertificate),
                (false, _) => Arc::new(StaticCredentials::empty()),
            };
        Ok(Self::new(
            config.tls_enabled,
            channel_id,
            client,
            signer,
            credentials,
        ))
    }

    /// Channel this requester subscribes to.
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Send one seek request resuming from the ledger's current height.
    ///
    /// Errors from the ledger and the delivery client are returned as-is;
    /// there is no retry.
    pub async fn request_blocks(&self, ledger_info: &dyn LedgerInfo) -> Result<(), DeliverError> {
        let height = match ledger_info.ledger_height().await {
            Ok(height) => height,
            Err(e) => {
                error!(
                    channel_id = %self.channel_id,
                    error = %e,
                    "[qc-19] Can't get ledger height from committer"
                );
                record_height_unavailable();
                return Err(DeliverError::HeightUnavailable(e));
            }
        };

        let seek_info = seek_info_for_height(height);
        match seek_info.start {
            SeekPosition::Specified(block) => debug!(
                channel_id = %self.channel_id,
                block,
                "[qc-19] Starting deliver with block"
            ),
            _ => debug!(
                channel_id = %self.channel_id,
                "[qc-19] Starting deliver with oldest block"
            ),
        }

        self.seek(&seek_info).await
    }

    async fn seek(&self, seek_info: &SeekInfo) -> Result<(), DeliverError> {
        let tls_cert_hash = self.tls_cert_hash()?;
        let env = create_signed_envelope_with_tls_binding(
            HeaderType::DeliverSeekInfo,
            &self.channel_id,
            Some(self.signer.as_ref()),
            seek_info,
            MSG_VERSION,
            EPOCH,
            tls_cert_hash.as_ref().map(|h| h.as_slice()),
        )?;

        record_seek_request(seek_info.start.label());
        self.client
            .send(env)
            .await
            .map_err(DeliverError::SendError)
    }

    fn tls_cert_hash(&self) -> Result<Option<Hash>, DeliverError> {
        if !self.tls {
            return Ok(None);
        }
        let chain = self.credentials.client_certificate_chain();
        let leaf = chain
            .first()
            .ok_or(DeliverError::MissingClientCertificate)?;
        Ok(Some(compute_sha256(leaf.as_ref())))
    }
}
