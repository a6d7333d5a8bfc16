//! # Shared Fixtures
//!
//! Builders for channel-creation proposals and an in-memory ordering node.

use std::sync::Arc;

use qc_18_channel_admission::adapters::proposed_channel_config;
use qc_18_channel_admission::{
    AcceptAllMetadataValidator, AdmissionConfig, ChannelTemplate, InMemoryRegistrar,
    OrdererConfig, RuleSet, SharedSystemChannel,
};
use rustls::pki_types::CertificateDer;
use shared_crypto::LocalSigner;
use shared_types::{
    create_signed_envelope, make_channel_creation_transaction, unwrap_config_update,
    ConfigEnvelope, ConfigGroup, Envelope, EnvelopeError, HeaderType,
};

/// System channel id used across the suite.
pub const SYSTEM_CHANNEL: &str = "system-channel";

/// Write set naming one consortium with a single organization.
pub fn sample_write_set() -> ConfigGroup {
    ConfigGroup::default()
        .with_value("Consortium", b"SampleConsortium".to_vec())
        .with_group(
            "Application",
            ConfigGroup::default().with_group("SampleOrg", ConfigGroup::default()),
        )
}

/// Full `ORDERER_TRANSACTION` proposing `channel_id`, signed by `signer`.
///
/// The wrapped CONFIG carries exactly the config the registrar will derive
/// from the update, so the proposal is accepted on a healthy node.
pub fn channel_creation_proposal(
    channel_id: &str,
    signer: &LocalSigner,
) -> Result<Envelope, EnvelopeError> {
    let update_tx = make_channel_creation_transaction(channel_id, sample_write_set(), Some(signer))?;
    let update = unwrap_config_update(&update_tx)?;
    let config_tx = create_signed_envelope(
        HeaderType::Config,
        channel_id,
        Some(signer),
        &ConfigEnvelope {
            config: Some(proposed_channel_config(&update)),
            last_update: Some(update_tx),
        },
        0,
        0,
    )?;
    create_signed_envelope(
        HeaderType::OrdererTransaction,
        SYSTEM_CHANNEL,
        Some(signer),
        &config_tx,
        0,
        0,
    )
}

/// Ordering node wired from the in-memory adapters.
pub struct OrderingNode {
    /// System channel config handle.
    pub system: Arc<SharedSystemChannel>,
    /// Channel registry.
    pub registrar: Arc<InMemoryRegistrar>,
    /// Full system channel rule set.
    pub rules: RuleSet,
}

impl OrderingNode {
    /// Node allowing at most `max_channels` application channels (0 = unlimited).
    pub fn new(max_channels: u64) -> Self {
        let system = Arc::new(SharedSystemChannel::new(OrdererConfig {
            max_channels_count: max_channels,
            ..Default::default()
        }));
        let registrar = Arc::new(InMemoryRegistrar::new(
            SYSTEM_CHANNEL,
            system.clone(),
            ChannelTemplate::default(),
        ));
        let rules = RuleSet::system_channel(
            &AdmissionConfig::default(),
            system.clone(),
            registrar.clone(),
            Arc::new(AcceptAllMetadataValidator),
        );
        Self {
            system,
            registrar,
            rules,
        }
    }
}

/// Self-signed client certificate, as DER and PEM.
pub fn client_certificate(host: &str) -> (CertificateDer<'static>, String) {
    let rcgen::CertifiedKey { cert, .. } =
        rcgen::generate_simple_self_signed(vec![host.to_string()])
            .unwrap_or_else(|e| panic!("certificate generation failed: {e}"));
    (cert.der().clone(), cert.pem())
}
